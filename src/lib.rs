//! Accessibility preferences widget: a persisted settings store, the
//! presentation effects derived from it, an FLTK demo front end and a
//! static file server for the web build.

pub mod app;
pub mod server;
pub mod ui;
