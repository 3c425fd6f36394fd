//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move the highlight to the next model card
    NextModel,
    /// Move the highlight to the previous model card
    PrevModel,
    /// Pick the highlighted model
    SelectModel,
    /// Request the other suggestion mode
    ToggleMode,
    /// Flip the detailed-feedback preference
    ToggleDetailedFeedback,
    /// Flip the mnemonic-rules preference
    ToggleMnemonicRules,
    /// Move keyboard focus between the selector and the toggle
    SwitchFocus,
    /// Set the question count to the traditional suggestion
    UseSuggestion,
    /// Ask for one more question
    MoreQuestions,
    /// Ask for one question fewer
    FewerQuestions,
    /// Start a (simulated) generation run
    Generate,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NextModel => "Highlight next model",
            Self::PrevModel => "Highlight previous model",
            Self::SelectModel => "Pick highlighted model",
            Self::ToggleMode => "Switch suggestion mode",
            Self::ToggleDetailedFeedback => "Toggle detailed feedback",
            Self::ToggleMnemonicRules => "Toggle mnemonic rules",
            Self::SwitchFocus => "Switch focus",
            Self::UseSuggestion => "Use suggested question count",
            Self::MoreQuestions => "More questions",
            Self::FewerQuestions => "Fewer questions",
            Self::Generate => "Generate",
            Self::Quit => "Quit",
        }
    }

    /// All actions in display order
    pub const ALL: &'static [Self] = &[
        Self::NextModel,
        Self::PrevModel,
        Self::SelectModel,
        Self::ToggleMode,
        Self::ToggleDetailedFeedback,
        Self::ToggleMnemonicRules,
        Self::SwitchFocus,
        Self::UseSuggestion,
        Self::MoreQuestions,
        Self::FewerQuestions,
        Self::Generate,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::NextModel);
        bindings.insert("Down".to_string(), Action::NextModel);
        bindings.insert("Right".to_string(), Action::NextModel);
        bindings.insert("k".to_string(), Action::PrevModel);
        bindings.insert("Up".to_string(), Action::PrevModel);
        bindings.insert("Left".to_string(), Action::PrevModel);
        bindings.insert("Enter".to_string(), Action::SelectModel);
        bindings.insert(" ".to_string(), Action::SelectModel);
        bindings.insert("m".to_string(), Action::ToggleMode);
        bindings.insert("f".to_string(), Action::ToggleDetailedFeedback);
        bindings.insert("r".to_string(), Action::ToggleMnemonicRules);
        bindings.insert("Tab".to_string(), Action::SwitchFocus);
        bindings.insert("u".to_string(), Action::UseSuggestion);
        bindings.insert("+".to_string(), Action::MoreQuestions);
        bindings.insert("=".to_string(), Action::MoreQuestions);
        bindings.insert("-".to_string(), Action::FewerQuestions);
        bindings.insert("g".to_string(), Action::Generate);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Esc".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Prefer single chars over multi-char keys
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.iter()
            .map(|k| {
                if k == " " {
                    "Space".to_string()
                } else {
                    k.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<16} {}", action.description())
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::SelectModel, "pick"),
            (Action::ToggleMode, "mode"),
            (Action::SwitchFocus, "focus"),
            (Action::Generate, "generate"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .map(|(action, label)| {
                let key = self
                    .format_keys(*action)
                    .split('/')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                format!("[{key}]{label}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
