//! Owner state for the model selector and mode toggle.

use crate::catalog::{self, CATALOG};
use crate::config::{Config, ToggleRequest};
use crate::suggestion;
use crate::ui::{
    ModeToggleWidget, ModelSelectorWidget, SelectorEvent, Suggestion, SuggestionMode,
    ToggleEvent,
};
use tracing::{debug, info, warn};

/// Which pane receives keyboard actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The model selector grid.
    #[default]
    Selector,
    /// The suggestion mode toggle.
    Toggle,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Id of the chosen model
    pub selected_model: Option<&'static str>,

    /// Detailed-feedback preference
    pub detailed_feedback: bool,

    /// Mnemonic-rules preference
    pub mnemonic_rules: bool,

    /// Whether intelligent suggestions are active
    pub use_intelligent: bool,

    /// Words in the loaded source text
    pub word_count: usize,

    /// Number of questions to generate
    pub num_questions: u32,

    /// Ticks left before the simulated generation finishes
    pub busy_ticks_left: u32,

    /// Pane with keyboard focus
    pub focus: Focus,

    /// Catalog index of the keyboard-highlighted card
    pub highlighted: usize,

    /// Last status message
    pub status_message: Option<String>,

    /// Last error message
    pub last_error: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application with the given configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let selected_model = config
            .default_model
            .as_deref()
            .and_then(catalog::find)
            .map(|option| option.id);
        let highlighted = selected_model.and_then(catalog::position).unwrap_or(0);
        let use_intelligent = config.start_mode.is_intelligent();
        let num_questions = suggestion::suggested_questions(0, &config.suggestion);

        Self {
            config,
            selected_model,
            detailed_feedback: false,
            mnemonic_rules: false,
            use_intelligent,
            word_count: 0,
            num_questions,
            busy_ticks_left: 0,
            focus: Focus::default(),
            highlighted,
            status_message: None,
            last_error: None,
            should_quit: false,
        }
    }

    /// Whether a generation is in progress
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.busy_ticks_left > 0
    }

    /// The active suggestion mode
    #[must_use]
    pub const fn mode(&self) -> SuggestionMode {
        SuggestionMode::from_flag(self.use_intelligent)
    }

    /// Display name of the chosen model
    #[must_use]
    pub fn selected_model_name(&self) -> Option<&'static str> {
        self.selected_model
            .and_then(catalog::find)
            .map(|option| option.name)
    }

    /// Build the selector widget for the current state
    #[must_use]
    pub fn selector_widget(&self) -> ModelSelectorWidget<'static> {
        let focused = self.focus == Focus::Selector;
        let highlighted = if focused {
            CATALOG.get(self.highlighted).map(|option| option.id)
        } else {
            None
        };
        ModelSelectorWidget::new()
            .detailed_feedback(self.detailed_feedback)
            .mnemonic_rules(self.mnemonic_rules)
            .highlighted(highlighted)
            .focused(focused)
    }

    /// Traditional question count suggested for the loaded text
    #[must_use]
    pub fn suggested_questions(&self) -> u32 {
        suggestion::suggested_questions(self.word_count, &self.config.suggestion)
    }

    /// Build the toggle widget for the current state
    #[must_use]
    pub fn toggle_widget(&self) -> ModeToggleWidget {
        let count = self.suggested_questions();
        ModeToggleWidget::new(self.use_intelligent)
            .loading(self.is_loading())
            .focused(matches!(self.focus, Focus::Toggle))
            .suggestion(Some(Suggestion {
                count,
                applied: self.num_questions == count,
            }))
    }

    /// Load the text questions are generated from
    ///
    /// The question count follows the new suggestion.
    pub fn set_source_text(&mut self, text: &str) {
        self.word_count = suggestion::word_count(text);
        self.num_questions = self.suggested_questions();
        info!(
            words = self.word_count,
            suggested = self.num_questions,
            "Source text loaded"
        );
    }

    /// Commit a change requested by the model selector
    pub fn apply_selector_event(&mut self, event: SelectorEvent) {
        match event {
            SelectorEvent::ModelSelected(id) => {
                let Some(option) = catalog::find(id) else {
                    warn!(id, "Ignoring selection of unknown model");
                    return;
                };
                info!(model = option.id, "Model selected");
                self.selected_model = Some(option.id);
                if let Some(index) = catalog::position(option.id) {
                    self.highlighted = index;
                }
                self.last_error = None;
                self.set_status(format!("Modelo: {}", option.name));
            }
            SelectorEvent::DetailedFeedbackChanged(checked) => {
                debug!(checked, "Detailed feedback changed");
                self.detailed_feedback = checked;
            }
            SelectorEvent::MnemonicRulesChanged(checked) => {
                debug!(checked, "Mnemonic rules changed");
                self.mnemonic_rules = checked;
            }
        }
    }

    /// Commit a change requested by the mode toggle
    ///
    /// Requests are dropped while loading, mirroring the disabled buttons.
    pub fn apply_toggle_event(&mut self, event: ToggleEvent) {
        if self.is_loading() {
            debug!(?event, "Ignoring toggle request while loading");
            return;
        }
        match event {
            ToggleEvent::ToggleRequested { clicked } => self.apply_mode_request(clicked),
            ToggleEvent::UseSuggestedRequested { count } => self.set_num_questions(count),
        }
    }

    fn apply_mode_request(&mut self, clicked: SuggestionMode) {
        let next = match self.config.toggle_request {
            ToggleRequest::Flip => self.mode().flipped(),
            ToggleRequest::SetClicked => clicked,
        };
        if next == self.mode() {
            debug!(?clicked, "Toggle request leaves mode unchanged");
            return;
        }

        info!(mode = ?next, "Suggestion mode changed");
        self.use_intelligent = next.is_intelligent();
        self.set_status(format!("Método: {}", next.label()));
    }

    /// Move the highlight to the next card, wrapping around
    pub fn highlight_next(&mut self) {
        let count = CATALOG.len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    /// Move the highlight to the previous card, wrapping around
    pub fn highlight_prev(&mut self) {
        let count = CATALOG.len();
        if count > 0 {
            self.highlighted = self.highlighted.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Pick the highlighted card, as if it had been clicked
    pub fn select_highlighted(&mut self) {
        if let Some(option) = CATALOG.get(self.highlighted) {
            self.apply_selector_event(SelectorEvent::ModelSelected(option.id));
        }
    }

    /// Request the other mode, as if its button had been clicked
    pub fn request_other_mode(&mut self) {
        let clicked = self.mode().flipped();
        self.apply_toggle_event(ToggleEvent::ToggleRequested { clicked });
    }

    /// Adopt the traditional suggestion, as if "Usar" had been clicked
    pub fn use_suggestion(&mut self) {
        if self.use_intelligent {
            return;
        }
        let count = self.suggested_questions();
        self.apply_toggle_event(ToggleEvent::UseSuggestedRequested { count });
    }

    /// Ask for one more question
    pub fn more_questions(&mut self) {
        self.set_num_questions(self.num_questions.saturating_add(1));
    }

    /// Ask for one question fewer; never below one
    pub fn fewer_questions(&mut self) {
        self.set_num_questions(self.num_questions.saturating_sub(1));
    }

    fn set_num_questions(&mut self, count: u32) {
        let count = count.max(1);
        if count == self.num_questions {
            return;
        }
        debug!(count, "Question count changed");
        self.num_questions = count;
        self.set_status(format!("Preguntas: {count}"));
    }

    /// Move keyboard focus to the other pane
    pub const fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Selector => Focus::Toggle,
            Focus::Toggle => Focus::Selector,
        };
    }

    /// Start a simulated generation run with the current choices
    pub fn begin_generation(&mut self) {
        if self.is_loading() {
            return;
        }
        let Some(name) = self.selected_model_name() else {
            self.set_error("Selecciona un modelo antes de generar");
            return;
        };

        info!(
            model = name,
            mode = ?self.mode(),
            questions = self.num_questions,
            detailed_feedback = self.detailed_feedback,
            mnemonic_rules = self.mnemonic_rules,
            "Generation started"
        );
        self.busy_ticks_left = self.config.busy_ticks.max(1);
        self.last_error = None;
        self.set_status(format!("Generando con {name}..."));
    }

    /// Advance the busy countdown by one tick
    pub fn tick(&mut self) {
        if self.busy_ticks_left == 0 {
            return;
        }
        self.busy_ticks_left -= 1;
        if self.busy_ticks_left == 0 {
            info!("Generation finished");
            self.set_status("Generación completada");
        }
    }

    /// Set an error message to display
    pub fn set_error(&mut self, message: impl Into<String>) {
        let msg = message.into();
        warn!(error = %msg, "Application error");
        self.last_error = Some(msg);
    }

    /// Set a status message to display
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the current status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.last_error = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
