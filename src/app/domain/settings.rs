use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::infrastructure::error::{AppError, Result};

/// Storage key the whole record is persisted under.
pub const SETTINGS_STORAGE_KEY: &str = "accessibility-settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Normal,
    High,
    Dark,
}

impl ContrastMode {
    pub fn all() -> &'static [ContrastMode] {
        &[Self::Normal, Self::High, Self::Dark]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CursorSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

impl CursorSize {
    pub fn all() -> &'static [CursorSize] {
        &[Self::Normal, Self::Large, Self::ExtraLarge]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn all() -> &'static [TextAlign] {
        &[Self::Left, Self::Center, Self::Right]
    }

    /// CSS keyword, also used as the HTML `align` attribute value
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }
}

/// Inclusive bounds and slider step for a percentage setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PercentRange {
    /// Bound `value` to `min..=max` and snap it to the nearest step above
    /// `min`; halfway values round up.
    pub fn clamp(&self, value: u32) -> u32 {
        let offset = value.clamp(self.min, self.max) - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }

    /// Clamp a raw slider position. Negative and NaN inputs land on `min`.
    pub fn clamp_f64(&self, raw: f64) -> u32 {
        if raw.is_nan() || raw <= f64::from(self.min) {
            return self.min;
        }
        if raw >= f64::from(self.max) {
            return self.max;
        }
        let steps = ((raw - f64::from(self.min)) / f64::from(self.step)).round() as u32;
        self.clamp(self.min + steps * self.step)
    }
}

/// Percentage fields the panel drives with sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentField {
    FontSize,
    LineSpacing,
    LetterSpacing,
}

impl PercentField {
    pub fn range(&self) -> PercentRange {
        match self {
            Self::FontSize => PercentRange { min: 80, max: 200, step: 10 },
            Self::LineSpacing => PercentRange { min: 100, max: 200, step: 10 },
            Self::LetterSpacing => PercentRange { min: 100, max: 150, step: 5 },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FontSize => "Font Size",
            Self::LineSpacing => "Line Spacing",
            Self::LetterSpacing => "Letter Spacing",
        }
    }

    pub fn value_in(&self, settings: &AccessibilitySettings) -> u32 {
        match self {
            Self::FontSize => settings.font_size,
            Self::LineSpacing => settings.line_spacing,
            Self::LetterSpacing => settings.letter_spacing,
        }
    }

    pub fn to_setting(&self, value: u32) -> Setting {
        match self {
            Self::FontSize => Setting::FontSize(value),
            Self::LineSpacing => Setting::LineSpacing(value),
            Self::LetterSpacing => Setting::LetterSpacing(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub font_size: u32,
    pub contrast: ContrastMode,
    pub line_spacing: u32,
    pub letter_spacing: u32,
    pub dyslexic_font: bool,
    pub cursor_size: CursorSize,
    pub link_highlight: bool,
    pub reading_guide: bool,
    pub text_align: TextAlign,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: 100,
            contrast: ContrastMode::Normal,
            line_spacing: 100,
            letter_spacing: 100,
            dyslexic_font: false,
            cursor_size: CursorSize::Normal,
            link_highlight: false,
            reading_guide: false,
            text_align: TextAlign::Left,
        }
    }
}

impl AccessibilitySettings {
    /// Return a copy with one field replaced. Percent values are clamped and
    /// snapped to their step.
    pub fn with(&self, setting: Setting) -> Self {
        let mut next = *self;
        match setting {
            Setting::FontSize(v) => next.font_size = PercentField::FontSize.range().clamp(v),
            Setting::Contrast(v) => next.contrast = v,
            Setting::LineSpacing(v) => {
                next.line_spacing = PercentField::LineSpacing.range().clamp(v)
            }
            Setting::LetterSpacing(v) => {
                next.letter_spacing = PercentField::LetterSpacing.range().clamp(v)
            }
            Setting::DyslexicFont(v) => next.dyslexic_font = v,
            Setting::CursorSize(v) => next.cursor_size = v,
            Setting::LinkHighlight(v) => next.link_highlight = v,
            Setting::ReadingGuide(v) => next.reading_guide = v,
            Setting::TextAlign(v) => next.text_align = v,
        }
        next
    }

    /// Current value of `key`, as the setting that would reproduce it.
    pub fn get(&self, key: SettingKey) -> Setting {
        match key {
            SettingKey::FontSize => Setting::FontSize(self.font_size),
            SettingKey::Contrast => Setting::Contrast(self.contrast),
            SettingKey::LineSpacing => Setting::LineSpacing(self.line_spacing),
            SettingKey::LetterSpacing => Setting::LetterSpacing(self.letter_spacing),
            SettingKey::DyslexicFont => Setting::DyslexicFont(self.dyslexic_font),
            SettingKey::CursorSize => Setting::CursorSize(self.cursor_size),
            SettingKey::LinkHighlight => Setting::LinkHighlight(self.link_highlight),
            SettingKey::ReadingGuide => Setting::ReadingGuide(self.reading_guide),
            SettingKey::TextAlign => Setting::TextAlign(self.text_align),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    FontSize,
    Contrast,
    LineSpacing,
    LetterSpacing,
    DyslexicFont,
    CursorSize,
    LinkHighlight,
    ReadingGuide,
    TextAlign,
}

impl SettingKey {
    pub fn all() -> &'static [SettingKey] {
        &[
            Self::FontSize,
            Self::Contrast,
            Self::LineSpacing,
            Self::LetterSpacing,
            Self::DyslexicFont,
            Self::CursorSize,
            Self::LinkHighlight,
            Self::ReadingGuide,
            Self::TextAlign,
        ]
    }

    /// Field name in the persisted JSON record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FontSize => "fontSize",
            Self::Contrast => "contrast",
            Self::LineSpacing => "lineSpacing",
            Self::LetterSpacing => "letterSpacing",
            Self::DyslexicFont => "dyslexicFont",
            Self::CursorSize => "cursorSize",
            Self::LinkHighlight => "linkHighlight",
            Self::ReadingGuide => "readingGuide",
            Self::TextAlign => "textAlign",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == name)
    }
}

/// A single field assignment: the unit of mutation for the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    FontSize(u32),
    Contrast(ContrastMode),
    LineSpacing(u32),
    LetterSpacing(u32),
    DyslexicFont(bool),
    CursorSize(CursorSize),
    LinkHighlight(bool),
    ReadingGuide(bool),
    TextAlign(TextAlign),
}

impl Setting {
    pub fn key(&self) -> SettingKey {
        match self {
            Self::FontSize(_) => SettingKey::FontSize,
            Self::Contrast(_) => SettingKey::Contrast,
            Self::LineSpacing(_) => SettingKey::LineSpacing,
            Self::LetterSpacing(_) => SettingKey::LetterSpacing,
            Self::DyslexicFont(_) => SettingKey::DyslexicFont,
            Self::CursorSize(_) => SettingKey::CursorSize,
            Self::LinkHighlight(_) => SettingKey::LinkHighlight,
            Self::ReadingGuide(_) => SettingKey::ReadingGuide,
            Self::TextAlign(_) => SettingKey::TextAlign,
        }
    }

    /// Build a setting from a field name and a JSON value.
    ///
    /// Percent fields accept any non-negative integer (clamping happens when
    /// the setting is applied); enum fields accept their serialized names.
    pub fn from_json(name: &str, value: &Value) -> Result<Self> {
        let key = SettingKey::parse(name).ok_or_else(|| AppError::UnknownSetting(name.to_string()))?;
        let invalid = |reason: String| AppError::InvalidSetting {
            key: name.to_string(),
            reason,
        };

        let percent = || -> Result<u32> {
            let n = value
                .as_u64()
                .ok_or_else(|| invalid(format!("expected a non-negative integer, got {}", value)))?;
            Ok(u32::try_from(n).unwrap_or(u32::MAX))
        };
        let flag = || -> Result<bool> {
            value
                .as_bool()
                .ok_or_else(|| invalid(format!("expected a boolean, got {}", value)))
        };

        let setting = match key {
            SettingKey::FontSize => Self::FontSize(percent()?),
            SettingKey::LineSpacing => Self::LineSpacing(percent()?),
            SettingKey::LetterSpacing => Self::LetterSpacing(percent()?),
            SettingKey::DyslexicFont => Self::DyslexicFont(flag()?),
            SettingKey::LinkHighlight => Self::LinkHighlight(flag()?),
            SettingKey::ReadingGuide => Self::ReadingGuide(flag()?),
            SettingKey::Contrast => Self::Contrast(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            ),
            SettingKey::CursorSize => Self::CursorSize(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            ),
            SettingKey::TextAlign => Self::TextAlign(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            ),
        };
        Ok(setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let settings = AccessibilitySettings::default();
        assert_eq!(settings.font_size, 100);
        assert_eq!(settings.contrast, ContrastMode::Normal);
        assert_eq!(settings.line_spacing, 100);
        assert_eq!(settings.letter_spacing, 100);
        assert!(!settings.dyslexic_font);
        assert_eq!(settings.cursor_size, CursorSize::Normal);
        assert!(!settings.link_highlight);
        assert!(!settings.reading_guide);
        assert_eq!(settings.text_align, TextAlign::Left);
    }

    #[test]
    fn test_json_field_names() {
        let settings = AccessibilitySettings {
            cursor_size: CursorSize::ExtraLarge,
            contrast: ContrastMode::High,
            ..Default::default()
        };
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["fontSize"], 100);
        assert_eq!(json["contrast"], "high");
        assert_eq!(json["cursorSize"], "extra-large");
        assert_eq!(json["textAlign"], "left");
        assert_eq!(json["dyslexicFont"], false);
        for key in SettingKey::all() {
            assert!(json.get(key.as_str()).is_some(), "missing {}", key.as_str());
        }
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let before = AccessibilitySettings::default();
        let after = before.with(Setting::Contrast(ContrastMode::Dark));
        assert_eq!(after.contrast, ContrastMode::Dark);
        assert_eq!(
            AccessibilitySettings { contrast: ContrastMode::Normal, ..after },
            before
        );
    }

    #[test]
    fn test_with_clamps_percent_fields() {
        let s = AccessibilitySettings::default();
        assert_eq!(s.with(Setting::FontSize(250)).font_size, 200);
        assert_eq!(s.with(Setting::FontSize(10)).font_size, 80);
        assert_eq!(s.with(Setting::LineSpacing(90)).line_spacing, 100);
        assert_eq!(s.with(Setting::LetterSpacing(400)).letter_spacing, 150);
        assert_eq!(s.with(Setting::FontSize(137)).font_size, 140);
    }

    #[test]
    fn test_get_round_trips_through_with() {
        let s = AccessibilitySettings {
            font_size: 130,
            reading_guide: true,
            text_align: TextAlign::Right,
            ..Default::default()
        };
        for key in SettingKey::all() {
            assert_eq!(s.with(s.get(*key)), s);
        }
    }

    #[test]
    fn test_clamp_f64() {
        let range = PercentField::LetterSpacing.range();
        assert_eq!(range.clamp_f64(-3.0), 100);
        assert_eq!(range.clamp_f64(f64::NAN), 100);
        assert_eq!(range.clamp_f64(125.0), 125);
        assert_eq!(range.clamp_f64(124.6), 125);
        assert_eq!(range.clamp_f64(999.0), 150);
        assert_eq!(range.clamp_f64(113.0), 115);
        assert_eq!(range.clamp_f64(111.9), 110);
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        let font = PercentField::FontSize.range();
        assert_eq!(font.clamp(125), 130);
        assert_eq!(font.clamp(124), 120);
        assert_eq!(font.clamp(137), 140);
        assert_eq!(font.clamp(199), 200);
        assert_eq!(PercentField::LineSpacing.range().clamp(101), 100);
        assert_eq!(PercentField::LetterSpacing.range().clamp(148), 150);

        for field in [PercentField::FontSize, PercentField::LineSpacing, PercentField::LetterSpacing] {
            let range = field.range();
            for value in 0..=300 {
                let snapped = range.clamp(value);
                assert!((range.min..=range.max).contains(&snapped));
                assert_eq!((snapped - range.min) % range.step, 0, "{:?} {}", field, value);
            }
        }
    }

    #[test]
    fn test_setting_key_parse() {
        assert_eq!(SettingKey::parse("letterSpacing"), Some(SettingKey::LetterSpacing));
        assert_eq!(SettingKey::parse("letter_spacing"), None);
        for key in SettingKey::all() {
            assert_eq!(SettingKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_setting_from_json() {
        assert_eq!(
            Setting::from_json("fontSize", &json!(120)).unwrap(),
            Setting::FontSize(120)
        );
        assert_eq!(
            Setting::from_json("cursorSize", &json!("extra-large")).unwrap(),
            Setting::CursorSize(CursorSize::ExtraLarge)
        );
        assert_eq!(
            Setting::from_json("readingGuide", &json!(true)).unwrap(),
            Setting::ReadingGuide(true)
        );
    }

    #[test]
    fn test_setting_from_json_rejects_bad_input() {
        let err = Setting::from_json("fontColor", &json!("red")).unwrap_err();
        assert!(matches!(err, AppError::UnknownSetting(ref k) if k == "fontColor"));

        let err = Setting::from_json("fontSize", &json!("big")).unwrap_err();
        assert!(matches!(err, AppError::InvalidSetting { ref key, .. } if key == "fontSize"));

        assert!(Setting::from_json("contrast", &json!("sepia")).is_err());
        assert!(Setting::from_json("dyslexicFont", &json!(1)).is_err());
        assert!(Setting::from_json("lineSpacing", &json!(-10)).is_err());
    }

    #[test]
    fn test_setting_key_matches_variant() {
        let settings = AccessibilitySettings::default();
        for key in SettingKey::all() {
            assert_eq!(settings.get(*key).key(), *key);
        }
    }
}
