//! Translation of a settings record into document-level presentation state.
//!
//! The document is reached only through [`DocumentRoot`]: a root font size,
//! a set of class flags and a map of custom properties. Stylesheets (or the
//! desktop page renderer) consume those hooks; nothing here knows how they
//! are drawn.

use std::collections::{BTreeMap, BTreeSet};

use crate::app::domain::settings::{AccessibilitySettings, ContrastMode, CursorSize};

pub const CLASS_CONTRAST_HIGH: &str = "contrast-high";
pub const CLASS_CONTRAST_DARK: &str = "contrast-dark";
pub const CLASS_DYSLEXIC_FONT: &str = "dyslexic-font";
pub const CLASS_CURSOR_LARGE: &str = "cursor-large";
pub const CLASS_CURSOR_EXTRA_LARGE: &str = "cursor-extra-large";
pub const CLASS_LINK_HIGHLIGHT: &str = "link-highlight";
pub const CLASS_READING_GUIDE: &str = "reading-guide";

pub const PROP_LINE_SPACING: &str = "--line-spacing";
pub const PROP_LETTER_SPACING: &str = "--letter-spacing";
pub const PROP_TEXT_ALIGN: &str = "--text-align";

/// The document surface effects are written to.
pub trait DocumentRoot {
    fn set_font_size(&mut self, value: &str);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_property(&mut self, name: &str, value: &str);

    fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Letter spacing percentage as an `em` offset: 150% -> 0.5.
pub fn letter_spacing_em(percent: u32) -> f64 {
    f64::from(percent.saturating_sub(100)) / 100.0
}

/// Write every derived presentation hook for `settings` onto `root`.
///
/// Mutually exclusive flags are cleared before one is set, so applying the
/// same record twice leaves the root unchanged.
pub fn apply_effects(settings: &AccessibilitySettings, root: &mut impl DocumentRoot) {
    root.set_font_size(&format!("{}%", settings.font_size));

    root.remove_class(CLASS_CONTRAST_HIGH);
    root.remove_class(CLASS_CONTRAST_DARK);
    match settings.contrast {
        ContrastMode::Normal => {}
        ContrastMode::High => root.add_class(CLASS_CONTRAST_HIGH),
        ContrastMode::Dark => root.add_class(CLASS_CONTRAST_DARK),
    }

    root.set_property(PROP_LINE_SPACING, &format!("{}%", settings.line_spacing));
    root.set_property(
        PROP_LETTER_SPACING,
        &format!("{}em", letter_spacing_em(settings.letter_spacing)),
    );

    root.toggle_class(CLASS_DYSLEXIC_FONT, settings.dyslexic_font);

    root.remove_class(CLASS_CURSOR_LARGE);
    root.remove_class(CLASS_CURSOR_EXTRA_LARGE);
    match settings.cursor_size {
        CursorSize::Normal => {}
        CursorSize::Large => root.add_class(CLASS_CURSOR_LARGE),
        CursorSize::ExtraLarge => root.add_class(CLASS_CURSOR_EXTRA_LARGE),
    }

    root.toggle_class(CLASS_LINK_HIGHLIGHT, settings.link_highlight);
    root.toggle_class(CLASS_READING_GUIDE, settings.reading_guide);

    root.set_property(PROP_TEXT_ALIGN, settings.text_align.keyword());
}

/// In-memory document root: what a page's `<html>` element would carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationState {
    font_size: Option<String>,
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &AccessibilitySettings) -> Self {
        let mut state = Self::new();
        apply_effects(settings, &mut state);
        state
    }

    pub fn font_size(&self) -> Option<&str> {
        self.font_size.as_deref()
    }

    /// Root font size as a percentage, 100 when unset or unparseable.
    pub fn font_scale_percent(&self) -> u32 {
        self.font_size
            .as_deref()
            .and_then(|v| v.strip_suffix('%'))
            .and_then(|v| v.parse().ok())
            .unwrap_or(100)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Space-separated class list, sorted.
    pub fn class_attr(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }

    /// Inline style declaration for the root element.
    pub fn style_attr(&self) -> String {
        let mut decls = Vec::with_capacity(self.properties.len() + 1);
        if let Some(size) = &self.font_size {
            decls.push(format!("font-size: {}", size));
        }
        for (name, value) in &self.properties {
            decls.push(format!("{}: {}", name, value));
        }
        decls.join("; ")
    }
}

impl DocumentRoot for PresentationState {
    fn set_font_size(&mut self, value: &str) {
        self.font_size = Some(value.to_string());
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}
