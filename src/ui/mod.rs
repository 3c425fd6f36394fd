//! UI components for the TUI
//!
//! The model selector and mode toggle are stateless: they are rebuilt from
//! the owner's state on every frame and report clicks as events.
//! The terminal loop that hosts them lives in [`crate::tui`].

pub mod colors;
mod components;

pub use components::{
    button::{Button, Size as ButtonSize, Variant as ButtonVariant},
    icon::Icon,
    mode_toggle::{
        Event as ToggleEvent, Suggestion, SuggestionMode, ToggleLayout,
        Widget as ModeToggleWidget,
    },
    model_selector::{
        CARD_HEIGHT, DETAILED_FEEDBACK_LABEL, Event as SelectorEvent, MNEMONIC_RULES_LABEL,
        SelectorLayout, Widget as ModelSelectorWidget, columns_for_width,
    },
    status_bar::{StatusContent, Widget as StatusBarWidget},
};
pub use components::mode_toggle::{
    INTELLIGENT_LABEL, LOADING_LABEL, METHOD_LABEL, STATUS_LABEL, SUGGESTED_LABEL,
    TRADITIONAL_LABEL, USE_SUGGESTED_LABEL,
};
