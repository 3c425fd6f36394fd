//! genpick - terminal picker for question-generation settings
//!
//! genpick lets you choose the AI model used to generate quiz questions,
//! toggle the feedback and mnemonic preferences, and switch between the
//! traditional and intelligent suggestion modes, all from a TUI.

pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod suggestion;
pub mod tui;
pub mod ui;

pub use app::App;
pub use catalog::{CATALOG, ModelOption};
pub use config::Config;
