//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Settings store (reducer + persistence)
//! - Effect application onto the document root

pub mod effects;
pub mod store;
