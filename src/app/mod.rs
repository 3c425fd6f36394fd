//! Application state and logic
//!
//! [`App`] is the owner the widgets report to: it holds the chosen model,
//! the two preferences, and the suggestion-mode flag, and commits the
//! changes the widgets request.

mod actions;
mod event;
mod state;

pub use actions::Actions;
pub use event::{Event, Handler};
pub use state::{App, Focus};
