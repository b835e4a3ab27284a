use serde_json::Value;
use tracing::{debug, warn};

use crate::app::domain::settings::{AccessibilitySettings, SETTINGS_STORAGE_KEY, Setting};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::Storage;

/// A state transition on the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Set(Setting),
    Reset,
}

/// Pure reducer: the next record for `action`, no I/O.
pub fn reduce(current: &AccessibilitySettings, action: Action) -> AccessibilitySettings {
    match action {
        Action::Set(setting) => current.with(setting),
        Action::Reset => AccessibilitySettings::default(),
    }
}

/// Rebuild a record from persisted JSON, field by field on top of the defaults.
///
/// Unknown fields and fields with the wrong shape are skipped, so records
/// written by older or newer builds still load.
pub fn merge_with_defaults(raw: &str) -> AccessibilitySettings {
    let defaults = AccessibilitySettings::default();
    let fields = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!(kind = json_kind(&other), "persisted settings are not an object, using defaults");
            return defaults;
        }
        Err(e) => {
            warn!(error = %e, "failed to parse persisted settings, using defaults");
            return defaults;
        }
    };

    fields.iter().fold(defaults, |acc, (name, value)| {
        match Setting::from_json(name, value) {
            Ok(setting) => reduce(&acc, Action::Set(setting)),
            Err(e) => {
                warn!(field = %name, error = %e, "ignoring persisted field");
                acc
            }
        }
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Owner of the current settings record and its persisted copy.
pub struct SettingsStore {
    settings: AccessibilitySettings,
    storage: Box<dyn Storage>,
}

impl SettingsStore {
    /// Load the persisted record, or start from defaults if there is none.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let settings = match storage.get_item(SETTINGS_STORAGE_KEY) {
            Ok(Some(raw)) => merge_with_defaults(&raw),
            Ok(None) => {
                debug!("no persisted settings, using defaults");
                AccessibilitySettings::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to read settings storage, using defaults");
                AccessibilitySettings::default()
            }
        };
        Self { settings, storage }
    }

    pub fn get(&self) -> &AccessibilitySettings {
        &self.settings
    }

    /// Replace one field and persist the result.
    pub fn update(&mut self, setting: Setting) -> &AccessibilitySettings {
        self.dispatch(Action::Set(setting))
    }

    /// Dynamic form of [`update`](Self::update) keyed by JSON field name.
    /// On error the record is left untouched.
    pub fn update_key(&mut self, name: &str, value: &Value) -> Result<&AccessibilitySettings> {
        let setting = Setting::from_json(name, value)?;
        Ok(self.update(setting))
    }

    pub fn reset(&mut self) -> &AccessibilitySettings {
        self.dispatch(Action::Reset)
    }

    fn dispatch(&mut self, action: Action) -> &AccessibilitySettings {
        self.settings = reduce(&self.settings, action);
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist settings");
        }
        &self.settings
    }

    /// Write the current record to storage
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.settings)?;
        self.storage.set_item(SETTINGS_STORAGE_KEY, &json)
    }
}
