use serde_json::Value;
use tracing::debug;

use crate::app::domain::settings::{AccessibilitySettings, Setting};
use crate::app::infrastructure::error::Result;
use crate::app::services::effects::{PresentationState, apply_effects};
use crate::app::services::store::SettingsStore;

/// Couples the settings store with the presentation state it drives.
///
/// Every mutation goes store first, then effect application, inside the same
/// call; readers never see a record the presentation does not reflect.
pub struct AccessibilityController {
    store: SettingsStore,
    presentation: PresentationState,
}

impl AccessibilityController {
    pub fn new(store: SettingsStore) -> Self {
        let presentation = PresentationState::from_settings(store.get());
        Self { store, presentation }
    }

    pub fn settings(&self) -> &AccessibilitySettings {
        self.store.get()
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn update(&mut self, setting: Setting) -> &AccessibilitySettings {
        debug!(?setting, "update setting");
        self.store.update(setting);
        self.reapply()
    }

    pub fn update_key(&mut self, name: &str, value: &Value) -> Result<&AccessibilitySettings> {
        self.store.update_key(name, value)?;
        Ok(self.reapply())
    }

    pub fn reset(&mut self) -> &AccessibilitySettings {
        debug!("reset settings");
        self.store.reset();
        self.reapply()
    }

    fn reapply(&mut self) -> &AccessibilitySettings {
        apply_effects(self.store.get(), &mut self.presentation);
        self.store.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::settings::{ContrastMode, SETTINGS_STORAGE_KEY};
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::app::services::effects::{CLASS_CONTRAST_DARK, CLASS_READING_GUIDE, PROP_LETTER_SPACING};
    use serde_json::json;

    fn controller() -> AccessibilityController {
        AccessibilityController::new(SettingsStore::load(Box::new(MemoryStorage::new())))
    }

    #[test]
    fn test_initial_presentation_matches_loaded_record() {
        let raw = r#"{"contrast":"dark","readingGuide":true}"#;
        let store = SettingsStore::load(Box::new(MemoryStorage::with_item(SETTINGS_STORAGE_KEY, raw)));
        let controller = AccessibilityController::new(store);
        assert!(controller.presentation().has_class(CLASS_CONTRAST_DARK));
        assert!(controller.presentation().has_class(CLASS_READING_GUIDE));
    }

    #[test]
    fn test_update_reapplies_effects() {
        let mut controller = controller();
        controller.update(Setting::LetterSpacing(150));
        assert_eq!(controller.presentation().property(PROP_LETTER_SPACING), Some("0.5em"));
        assert_eq!(
            *controller.presentation(),
            PresentationState::from_settings(controller.settings())
        );
    }

    #[test]
    fn test_update_key_reapplies_effects() {
        let mut controller = controller();
        controller.update_key("contrast", &json!("dark")).unwrap();
        assert_eq!(controller.settings().contrast, ContrastMode::Dark);
        assert!(controller.presentation().has_class(CLASS_CONTRAST_DARK));

        assert!(controller.update_key("contrast", &json!("sepia")).is_err());
        assert!(controller.presentation().has_class(CLASS_CONTRAST_DARK));
    }

    #[test]
    fn test_reset_clears_presentation() {
        let mut controller = controller();
        controller.update(Setting::Contrast(ContrastMode::Dark));
        controller.update(Setting::ReadingGuide(true));
        controller.update(Setting::FontSize(160));
        controller.reset();

        assert_eq!(*controller.settings(), AccessibilitySettings::default());
        assert_eq!(
            *controller.presentation(),
            PresentationState::from_settings(&AccessibilitySettings::default())
        );
    }
}
