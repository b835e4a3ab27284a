use std::cell::RefCell;
use std::rc::Rc;

use super::accessibility::AccessibilityController;
use super::reading_guide::ReadingGuide;
use crate::app::domain::settings::{AccessibilitySettings, PercentField, Setting};
use crate::app::infrastructure::pointer::PointerHub;

pub type SharedAccessibility = Rc<RefCell<AccessibilityController>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// Boolean preferences rendered as on/off switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    DyslexicFont,
    LinkHighlight,
    ReadingGuide,
}

impl Toggle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DyslexicFont => "Dyslexic-Friendly Font",
            Self::LinkHighlight => "Highlight Links",
            Self::ReadingGuide => "Reading Guide",
        }
    }

    pub fn value_in(&self, settings: &AccessibilitySettings) -> bool {
        match self {
            Self::DyslexicFont => settings.dyslexic_font,
            Self::LinkHighlight => settings.link_highlight,
            Self::ReadingGuide => settings.reading_guide,
        }
    }

    fn to_setting(self, on: bool) -> Setting {
        match self {
            Self::DyslexicFont => Setting::DyslexicFont(on),
            Self::LinkHighlight => Setting::LinkHighlight(on),
            Self::ReadingGuide => Setting::ReadingGuide(on),
        }
    }
}

/// Headless side of the floating panel: visibility, input clamping and
/// dispatch into the shared accessibility controller.
pub struct PanelController {
    accessibility: SharedAccessibility,
    pointer: Rc<PointerHub>,
    guide: ReadingGuide,
    open: bool,
}

impl PanelController {
    pub fn new(accessibility: SharedAccessibility, pointer: Rc<PointerHub>) -> Self {
        let mut panel = Self {
            accessibility,
            pointer,
            guide: ReadingGuide::new(),
            open: false,
        };
        panel.sync_guide();
        panel
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show or hide the panel surface.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn settings(&self) -> AccessibilitySettings {
        *self.accessibility.borrow().settings()
    }

    pub fn guide(&self) -> &ReadingGuide {
        &self.guide
    }

    /// Slider moved: clamp to the field's range and step before it reaches
    /// the store.
    pub fn set_percent(&mut self, field: PercentField, raw: f64) -> AccessibilitySettings {
        let value = field.range().clamp_f64(raw);
        self.apply(field.to_setting(value))
    }

    /// One step down or up, stopping at the range ends.
    pub fn step(&mut self, field: PercentField, direction: StepDirection) -> AccessibilitySettings {
        let range = field.range();
        let current = field.value_in(&self.settings());
        let next = match direction {
            StepDirection::Decrease => current.saturating_sub(range.step).max(range.min),
            StepDirection::Increase => current.saturating_add(range.step).min(range.max),
        };
        self.apply(field.to_setting(next))
    }

    pub fn flip(&mut self, toggle: Toggle) -> AccessibilitySettings {
        let on = !toggle.value_in(&self.settings());
        self.apply(toggle.to_setting(on))
    }

    /// Set an enum-valued preference (contrast, cursor size, alignment).
    pub fn choose(&mut self, setting: Setting) -> AccessibilitySettings {
        self.apply(setting)
    }

    pub fn reset(&mut self) -> AccessibilitySettings {
        let settings = *self.accessibility.borrow_mut().reset();
        self.sync_guide();
        settings
    }

    fn apply(&mut self, setting: Setting) -> AccessibilitySettings {
        let settings = *self.accessibility.borrow_mut().update(setting);
        self.sync_guide();
        settings
    }

    fn sync_guide(&mut self) {
        let enabled = self.accessibility.borrow().settings().reading_guide;
        self.guide.sync(enabled, &self.pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::settings::{ContrastMode, SETTINGS_STORAGE_KEY, TextAlign};
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::app::services::store::SettingsStore;

    fn panel_with(storage: MemoryStorage) -> (PanelController, Rc<PointerHub>) {
        let accessibility = Rc::new(RefCell::new(AccessibilityController::new(
            SettingsStore::load(Box::new(storage)),
        )));
        let hub = Rc::new(PointerHub::new());
        (PanelController::new(accessibility, hub.clone()), hub)
    }

    fn panel() -> (PanelController, Rc<PointerHub>) {
        panel_with(MemoryStorage::new())
    }

    #[test]
    fn test_toggle_open_close() {
        let (mut panel, _) = panel();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_slider_input_is_clamped() {
        let (mut panel, _) = panel();
        assert_eq!(panel.set_percent(PercentField::FontSize, 250.0).font_size, 200);
        assert_eq!(panel.set_percent(PercentField::FontSize, 40.0).font_size, 80);
        assert_eq!(panel.set_percent(PercentField::LineSpacing, 170.0).line_spacing, 170);
        assert_eq!(panel.set_percent(PercentField::LetterSpacing, 151.0).letter_spacing, 150);
    }

    #[test]
    fn test_slider_input_snaps_to_step() {
        let (mut panel, _) = panel();
        assert_eq!(panel.set_percent(PercentField::FontSize, 125.0).font_size, 130);
        assert_eq!(panel.set_percent(PercentField::FontSize, 123.4).font_size, 120);
        assert_eq!(panel.set_percent(PercentField::LineSpacing, 101.0).line_spacing, 100);
        assert_eq!(panel.set_percent(PercentField::LetterSpacing, 113.0).letter_spacing, 115);
    }

    #[test]
    fn test_font_size_steps_stop_at_bounds() {
        let (mut panel, _) = panel();
        assert_eq!(panel.step(PercentField::FontSize, StepDirection::Increase).font_size, 110);
        panel.set_percent(PercentField::FontSize, 200.0);
        assert_eq!(panel.step(PercentField::FontSize, StepDirection::Increase).font_size, 200);
        panel.set_percent(PercentField::FontSize, 80.0);
        assert_eq!(panel.step(PercentField::FontSize, StepDirection::Decrease).font_size, 80);
    }

    #[test]
    fn test_flip_and_choose() {
        let (mut panel, _) = panel();
        assert!(panel.flip(Toggle::LinkHighlight).link_highlight);
        assert!(!panel.flip(Toggle::LinkHighlight).link_highlight);
        assert_eq!(
            panel.choose(Setting::TextAlign(TextAlign::Center)).text_align,
            TextAlign::Center
        );
    }

    #[test]
    fn test_reading_guide_subscription_follows_setting() {
        let (mut panel, hub) = panel();
        assert_eq!(hub.listener_count(), 0);

        panel.flip(Toggle::ReadingGuide);
        assert_eq!(hub.listener_count(), 1);
        hub.publish(210);
        assert_eq!(panel.guide().position(), Some(210));

        panel.flip(Toggle::ReadingGuide);
        assert_eq!(hub.listener_count(), 0);
        assert!(!panel.guide().is_active());
    }

    #[test]
    fn test_reset_drops_reading_guide() {
        let (mut panel, hub) = panel();
        panel.flip(Toggle::ReadingGuide);
        panel.choose(Setting::Contrast(ContrastMode::High));

        let settings = panel.reset();
        assert_eq!(settings, AccessibilitySettings::default());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_persisted_guide_subscribes_on_start() {
        let storage = MemoryStorage::with_item(SETTINGS_STORAGE_KEY, r#"{"readingGuide":true}"#);
        let (panel, hub) = panel_with(storage);
        assert!(panel.guide().is_active());
        assert_eq!(hub.listener_count(), 1);
    }
}
