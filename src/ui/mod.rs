pub mod main_window;
pub mod overlay;
pub mod page;
pub mod panel;
pub mod theme;
