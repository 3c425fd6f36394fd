//! Configuration management

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::catalog;
use crate::suggestion::SuggestionConfig;
use crate::ui::SuggestionMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the owner reacts to a click on either mode button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleRequest {
    /// Any click flips the mode, including a click on the active button.
    #[default]
    Flip,
    /// A click switches to the clicked mode; clicking the active one is a no-op.
    SetClicked,
}

/// A configuration value that loaded but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `default_model` names an id that is not in the catalog.
    #[error("unknown model id `{0}`")]
    UnknownModel(String),
    /// `poll_interval_ms` is zero.
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    /// `suggestion.words_per_question` is zero.
    #[error("words per question must be greater than zero")]
    ZeroWordsPerQuestion,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Ticks a simulated generation keeps the toggle busy
    #[serde(default = "default_busy_ticks")]
    pub busy_ticks: u32,

    /// Model picked at startup, if any
    #[serde(default)]
    pub default_model: Option<String>,

    /// Suggestion mode at startup
    #[serde(default)]
    pub start_mode: SuggestionMode,

    /// How mode button clicks are applied
    #[serde(default)]
    pub toggle_request: ToggleRequest,

    /// Traditional question-count suggestion
    #[serde(default)]
    pub suggestion: SuggestionConfig,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_busy_ticks() -> u32 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            busy_ticks: default_busy_ticks(),
            default_model: None,
            start_mode: SuggestionMode::default(),
            toggle_request: ToggleRequest::default(),
            suggestion: SuggestionConfig::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.suggestion.words_per_question == 0 {
            return Err(ConfigError::ZeroWordsPerQuestion);
        }
        if let Some(id) = &self.default_model
            && catalog::find(id).is_none()
        {
            return Err(ConfigError::UnknownModel(id.clone()));
        }
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("genpick")
            .join("config.json")
    }
}
