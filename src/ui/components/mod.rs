//! Reusable widgets

pub mod button;
pub mod icon;
pub mod mode_toggle;
pub mod model_selector;
pub mod status_bar;
