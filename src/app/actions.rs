//! Keybinding action dispatch

use crate::config::Action;
use tracing::debug;

use super::state::{App, Focus};

/// Handler for application actions
#[derive(Debug, Clone, Copy, Default)]
pub struct Actions;

impl Actions {
    /// Create a new action handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handle a keybinding action
    pub fn handle_action(self, app: &mut App, action: Action) {
        debug!(?action, focus = ?app.focus, "Handling action");
        match action {
            Action::NextModel => {
                if app.focus == Focus::Selector {
                    app.highlight_next();
                }
            }
            Action::PrevModel => {
                if app.focus == Focus::Selector {
                    app.highlight_prev();
                }
            }
            Action::SelectModel => match app.focus {
                Focus::Selector => app.select_highlighted(),
                // Enter on the toggle pane presses the inactive button
                Focus::Toggle => app.request_other_mode(),
            },
            Action::ToggleMode => app.request_other_mode(),
            Action::ToggleDetailedFeedback => {
                app.detailed_feedback = !app.detailed_feedback;
            }
            Action::ToggleMnemonicRules => {
                app.mnemonic_rules = !app.mnemonic_rules;
            }
            Action::SwitchFocus => app.switch_focus(),
            Action::UseSuggestion => app.use_suggestion(),
            Action::MoreQuestions => app.more_questions(),
            Action::FewerQuestions => app.fewer_questions(),
            Action::Generate => app.begin_generation(),
            Action::Quit => {
                app.should_quit = true;
            }
        }
    }
}
