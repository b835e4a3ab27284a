//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (AccessibilitySettings, Setting, Messages)
//! - `controllers/` - Orchestration (AccessibilityController, PanelController, ReadingGuide)
//! - `services/` - Business operations (settings store, effect application)
//! - `infrastructure/` - External integrations (storage, pointer hub, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::accessibility::AccessibilityController;
pub use controllers::panel::PanelController;
pub use domain::{AccessibilitySettings, Message, Setting};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStorage, MemoryStorage, Storage};
pub use services::effects::{DocumentRoot, PresentationState, apply_effects};
pub use services::store::SettingsStore;
