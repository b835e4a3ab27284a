//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Settings mutation plus effect re-application
//! - Control panel input handling
//! - Reading guide pointer subscription

pub mod accessibility;
pub mod panel;
pub mod reading_guide;
