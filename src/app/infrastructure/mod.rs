//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Per-profile key/value storage
//! - Pointer position fan-out
//! - Logging setup
//! - Error types

pub mod error;
pub mod logging;
pub mod pointer;
pub mod storage;
