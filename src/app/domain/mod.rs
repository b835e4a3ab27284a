//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Accessibility settings and single-field settings
//! - Message types for the event system

pub mod messages;
pub mod settings;

pub use messages::Message;
pub use settings::{AccessibilitySettings, ContrastMode, CursorSize, PercentField, Setting, SettingKey, TextAlign};
