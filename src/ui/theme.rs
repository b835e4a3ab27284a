use fltk::{
    button::Button,
    enums::{Color, Font},
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::services::effects::{
    CLASS_CONTRAST_DARK, CLASS_CONTRAST_HIGH, CLASS_DYSLEXIC_FONT, PresentationState,
};

/// Base page text size at 100%.
pub const BASE_TEXT_SIZE: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn color(&self) -> Color {
        Color::from_rgb(self.0, self.1, self.2)
    }
}

/// Colors the page and panel are drawn with for one contrast mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub heading: Rgb,
    pub link: Rgb,
    pub accent: Rgb,
    pub guide: Rgb,
}

impl Palette {
    pub fn normal() -> Self {
        Self {
            background: Rgb(239, 246, 255),
            surface: Rgb(255, 255, 255),
            text: Rgb(55, 65, 81),
            heading: Rgb(17, 24, 39),
            link: Rgb(37, 99, 235),
            accent: Rgb(37, 99, 235),
            guide: Rgb(59, 130, 246),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            surface: Rgb(0, 0, 0),
            text: Rgb(255, 255, 0),
            heading: Rgb(255, 255, 255),
            link: Rgb(0, 255, 255),
            accent: Rgb(255, 255, 0),
            guide: Rgb(255, 0, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgb(17, 24, 39),
            surface: Rgb(31, 41, 55),
            text: Rgb(209, 213, 219),
            heading: Rgb(255, 255, 255),
            link: Rgb(96, 165, 250),
            accent: Rgb(96, 165, 250),
            guide: Rgb(59, 130, 246),
        }
    }

    /// Pick the palette from the contrast flags on the document root.
    pub fn for_presentation(presentation: &PresentationState) -> Self {
        if presentation.has_class(CLASS_CONTRAST_HIGH) {
            Self::high_contrast()
        } else if presentation.has_class(CLASS_CONTRAST_DARK) {
            Self::dark()
        } else {
            Self::normal()
        }
    }
}

/// Page font: a plain wide face stands in for a dyslexia-friendly font.
pub fn page_font(presentation: &PresentationState) -> Font {
    if presentation.has_class(CLASS_DYSLEXIC_FONT) {
        Font::Courier
    } else {
        Font::Helvetica
    }
}

pub fn page_text_size(presentation: &PresentationState) -> i32 {
    let scaled = BASE_TEXT_SIZE as u32 * presentation.font_scale_percent() / 100;
    scaled.max(8) as i32
}

pub fn apply_theme(
    page: &mut HelpView,
    window: &mut Window,
    toggle: &mut Button,
    presentation: &PresentationState,
) {
    let palette = Palette::for_presentation(presentation);

    page.set_color(palette.background.color());
    page.set_text_font(page_font(presentation));
    page.set_text_size(page_text_size(presentation));

    window.set_color(palette.background.color());

    toggle.set_color(palette.accent.color());
    toggle.set_label_color(palette.surface.color());
    toggle.set_selection_color(palette.accent.color());

    page.redraw();
    window.redraw();
    toggle.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::settings::{AccessibilitySettings, ContrastMode, Setting};

    fn presentation(setting: Setting) -> PresentationState {
        PresentationState::from_settings(&AccessibilitySettings::default().with(setting))
    }

    #[test]
    fn test_palette_follows_contrast_flag() {
        assert_eq!(
            Palette::for_presentation(&presentation(Setting::Contrast(ContrastMode::Normal))),
            Palette::normal()
        );
        assert_eq!(
            Palette::for_presentation(&presentation(Setting::Contrast(ContrastMode::High))),
            Palette::high_contrast()
        );
        assert_eq!(
            Palette::for_presentation(&presentation(Setting::Contrast(ContrastMode::Dark))),
            Palette::dark()
        );
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(255, 255, 0).hex(), "#ffff00");
        assert_eq!(Rgb(0, 10, 171).hex(), "#000aab");
    }

    #[test]
    fn test_page_text_size_scales() {
        assert_eq!(page_text_size(&presentation(Setting::FontSize(100))), 14);
        assert_eq!(page_text_size(&presentation(Setting::FontSize(200))), 28);
        assert_eq!(page_text_size(&presentation(Setting::FontSize(80))), 11);
    }

    #[test]
    fn test_page_font() {
        assert_eq!(page_font(&presentation(Setting::DyslexicFont(true))), Font::Courier);
        assert_eq!(page_font(&presentation(Setting::DyslexicFont(false))), Font::Helvetica);
    }
}
