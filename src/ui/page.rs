//! Demo page shown behind the panel, rendered as HelpView HTML.
//!
//! The page reads only the presentation state (root font size, class flags,
//! custom properties), the same hooks a stylesheet would consume.

use crate::app::services::effects::{
    CLASS_LINK_HIGHLIGHT, PROP_LINE_SPACING, PROP_TEXT_ALIGN, PresentationState,
};

use super::theme::Palette;

const FEATURES: &[(&str, &str)] = &[
    (
        "Font Size Adjustment",
        "Increase or decrease text size from 80% to 200% for better readability.",
    ),
    (
        "Contrast Modes",
        "Switch between normal, high contrast, and dark mode themes.",
    ),
    (
        "Line & Letter Spacing",
        "Adjust spacing between lines and letters for improved reading comfort.",
    ),
    (
        "Dyslexic-Friendly Font",
        "Switch to a plainer, wider typeface designed for easier letter recognition.",
    ),
    (
        "Cursor Size",
        "Choose between normal, large, or extra-large cursor sizes.",
    ),
    (
        "Link Highlighting",
        "Enhance link visibility with bold underlines and colors.",
    ),
    (
        "Reading Guide",
        "A horizontal line that follows your cursor for easier reading.",
    ),
    (
        "Text Alignment",
        "Choose your preferred text alignment: left, center, or right.",
    ),
];

enum Inline<'a> {
    Text(&'a str),
    Link { href: &'a str, label: &'a str },
}

struct Section<'a> {
    title: &'a str,
    body: Vec<Vec<Inline<'a>>>,
}

fn sections() -> Vec<Section<'static>> {
    use Inline::{Link, Text};
    vec![
        Section {
            title: "Welcome to Our Accessible Website",
            body: vec![
                vec![Text(
                    "This demo showcases an accessibility panel that lets you customize \
                     your reading experience: font size, contrast modes, line spacing, \
                     and much more.",
                )],
                vec![Text(
                    "Everyone deserves access to digital content. These tools help make \
                     a page usable by people with various needs and preferences.",
                )],
            ],
        },
        Section {
            title: "Sample Article with Links",
            body: vec![
                vec![Text(
                    "Web accessibility is the inclusive practice of ensuring there are no \
                     barriers that prevent interaction with, or access to, websites by \
                     people with physical disabilities, situational disabilities, and \
                     socio-economic restrictions on bandwidth and speed.",
                )],
                vec![
                    Text("Visit the "),
                    Link {
                        href: "https://www.w3.org/WAI/",
                        label: "W3C Web Accessibility Initiative",
                    },
                    Text(" to learn more about accessibility standards. You can also explore "),
                    Link {
                        href: "https://webaim.org/",
                        label: "WebAIM",
                    },
                    Text(" for practical guidance and resources."),
                ],
                vec![Text(
                    "When websites and web tools are properly designed and coded, people \
                     with disabilities can use them.",
                )],
            ],
        },
        Section {
            title: "Try It Out!",
            body: vec![vec![Text(
                "Open the accessibility button in the bottom-right corner to customize \
                 your reading experience. All settings are saved automatically.",
            )]],
        },
    ]
}

/// Blank lines inserted after each paragraph for the `--line-spacing` value.
fn paragraph_gap(presentation: &PresentationState) -> usize {
    let percent: u32 = presentation
        .property(PROP_LINE_SPACING)
        .and_then(|v| v.strip_suffix('%'))
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);
    (percent.saturating_sub(100) / 50) as usize
}

/// HelpView follows an href by loading it as a local file. A bare fragment
/// with no matching anchor is a no-op, so clicks leave the page in place.
fn link_target(href: &str) -> String {
    format!("#{}", href)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn push_paragraph(
    out: &mut String,
    align: &str,
    inlines: &[Inline<'_>],
    highlight_links: bool,
    gap: usize,
) {
    out.push_str(&format!("<p align=\"{}\">", align));
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape(text)),
            Inline::Link { href, label } if highlight_links => {
                out.push_str(&format!(
                    "<a href=\"{}\"><b><u>{}</u></b></a>",
                    link_target(href),
                    escape(label)
                ));
            }
            Inline::Link { href, label } => {
                out.push_str(&format!("<a href=\"{}\">{}</a>", link_target(href), escape(label)));
            }
        }
    }
    out.push_str("</p>\n");
    out.push_str(&"<br>".repeat(gap));
}

pub fn render_page_html(presentation: &PresentationState) -> String {
    let palette = Palette::for_presentation(presentation);
    let align = presentation.property(PROP_TEXT_ALIGN).unwrap_or("left");
    let highlight_links = presentation.has_class(CLASS_LINK_HIGHLIGHT);
    let gap = paragraph_gap(presentation);

    let mut html = String::new();
    html.push_str(&format!(
        "<html><body bgcolor=\"{}\" text=\"{}\" link=\"{}\">\n",
        palette.background.hex(),
        palette.text.hex(),
        palette.link.hex()
    ));

    html.push_str(&format!(
        "<h1 align=\"center\"><font color=\"{}\">Accessibility Widget Demo</font></h1>\n",
        palette.heading.hex()
    ));
    push_paragraph(
        &mut html,
        "center",
        &[Inline::Text(
            "Click the accessibility button in the bottom-right corner to customize your experience",
        )],
        highlight_links,
        gap,
    );

    let mut sections = sections().into_iter();
    if let Some(intro) = sections.next() {
        push_section(&mut html, &palette, align, &intro, highlight_links, gap);
    }

    html.push_str(&format!(
        "<h2 align=\"{}\"><font color=\"{}\">Features</font></h2>\n",
        align,
        palette.heading.hex()
    ));
    for (title, text) in FEATURES {
        html.push_str(&format!(
            "<h3 align=\"{}\"><font color=\"{}\">{}</font></h3>\n",
            align,
            palette.link.hex(),
            escape(title)
        ));
        push_paragraph(&mut html, align, &[Inline::Text(*text)], highlight_links, gap);
    }

    for section in sections {
        push_section(&mut html, &palette, align, &section, highlight_links, gap);
    }

    html.push_str(
        "<hr><p align=\"center\"><font size=\"2\">&copy; 2025 Accessibility Demo. \
         Built with accessibility in mind.</font></p>\n",
    );
    html.push_str("</body></html>\n");
    html
}

fn push_section(
    html: &mut String,
    palette: &Palette,
    align: &str,
    section: &Section<'_>,
    highlight_links: bool,
    gap: usize,
) {
    html.push_str(&format!(
        "<h2 align=\"{}\"><font color=\"{}\">{}</font></h2>\n",
        align,
        palette.heading.hex(),
        escape(section.title)
    ));
    for paragraph in &section.body {
        push_paragraph(html, align, paragraph, highlight_links, gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::settings::{AccessibilitySettings, ContrastMode, TextAlign};

    fn render(settings: AccessibilitySettings) -> String {
        render_page_html(&PresentationState::from_settings(&settings))
    }

    #[test]
    fn test_alignment_reaches_body_paragraphs() {
        let html = render(AccessibilitySettings {
            text_align: TextAlign::Right,
            ..Default::default()
        });
        assert!(html.contains("<h2 align=\"right\">"));
        assert!(html.contains("<p align=\"right\">"));
        // Page header stays centered
        assert!(html.contains("<h1 align=\"center\">"));
    }

    #[test]
    fn test_link_highlight() {
        let plain = render(AccessibilitySettings::default());
        assert!(plain.contains("<a href=\"#https://webaim.org/\">WebAIM</a>"));

        let highlighted = render(AccessibilitySettings {
            link_highlight: true,
            ..Default::default()
        });
        assert!(highlighted.contains("<a href=\"#https://webaim.org/\"><b><u>WebAIM</u></b></a>"));
    }

    #[test]
    fn test_links_stay_on_page() {
        for link_highlight in [false, true] {
            let html = render(AccessibilitySettings {
                link_highlight,
                ..Default::default()
            });
            let hrefs: Vec<&str> = html.split("href=\"").skip(1).collect();
            assert_eq!(hrefs.len(), 2);
            for href in hrefs {
                assert!(href.starts_with("#https://"), "{}", href);
            }
        }
    }

    #[test]
    fn test_contrast_colors() {
        let html = render(AccessibilitySettings {
            contrast: ContrastMode::High,
            ..Default::default()
        });
        assert!(html.contains("bgcolor=\"#000000\" text=\"#ffff00\" link=\"#00ffff\""));
    }

    #[test]
    fn test_line_spacing_gap() {
        let gap_of = |line_spacing| {
            paragraph_gap(&PresentationState::from_settings(&AccessibilitySettings {
                line_spacing,
                ..Default::default()
            }))
        };
        assert_eq!(gap_of(100), 0);
        assert_eq!(gap_of(140), 0);
        assert_eq!(gap_of(150), 1);
        assert_eq!(gap_of(200), 2);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(AccessibilitySettings::default());
        assert!(html.contains("Line &amp; Letter Spacing"));
    }
}
