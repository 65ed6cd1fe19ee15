//! Terminal browser for the roster directory.

pub mod app;
pub mod components;
pub mod ui;

pub use app::{App, ViewMode};
