//! Status bar widget

use super::mode_toggle::SuggestionMode;
use crate::ui::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug)]
pub enum StatusContent {
    /// Current choices and keybinding hints
    Normal {
        /// Display name of the chosen model, if any
        model: Option<&'static str>,
        /// Active suggestion mode
        mode: SuggestionMode,
        /// Keybinding hints
        hints: String,
    },
    /// Error message
    Error(String),
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a new status bar showing the current choices
    #[must_use]
    pub fn normal(
        model: Option<&'static str>,
        mode: SuggestionMode,
        hints: impl Into<String>,
    ) -> Self {
        Self {
            content: StatusContent::Normal {
                model,
                mode,
                hints: hints.into(),
            },
        }
    }

    /// Create a new status bar with an error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Error(message.into()),
        }
    }

    /// Create a new status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Error(msg) => Span::styled(
                format!(" Error: {msg} "),
                Style::default()
                    .fg(colors::ACCENT_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            StatusContent::Status(msg) => Span::styled(
                format!(" {msg} "),
                Style::default().fg(colors::ACCENT_POSITIVE),
            ),
            StatusContent::Normal { model, mode, hints } => Span::styled(
                format!(
                    " {} | {} | {hints} ",
                    model.unwrap_or("sin modelo"),
                    mode.label()
                ),
                Style::default().fg(colors::TEXT_DIM),
            ),
        };

        Paragraph::new(Line::from(span)).style(Style::default().bg(colors::SURFACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget as RatatuiWidget};

    #[test]
    fn test_status_bar_normal() {
        let widget = Widget::normal(Some("DeepSeek"), SuggestionMode::Intelligent, "[q]quit");
        assert!(matches!(
            &widget.content,
            StatusContent::Normal {
                model: Some("DeepSeek"),
                mode: SuggestionMode::Intelligent,
                hints,
            } if hints == "[q]quit"
        ));
    }

    #[test]
    fn test_status_bar_error() {
        let widget = Widget::error("Something went wrong");
        assert!(
            matches!(&widget.content, StatusContent::Error(msg) if msg == "Something went wrong")
        );
    }

    #[test]
    fn test_status_bar_status() {
        let widget = Widget::status("Modelo seleccionado");
        assert!(
            matches!(&widget.content, StatusContent::Status(msg) if msg == "Modelo seleccionado")
        );
    }

    fn render_line(widget: &Widget) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        RatatuiWidget::render(widget.to_paragraph(), area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_to_paragraph_variants() {
        let normal = render_line(&Widget::normal(None, SuggestionMode::Traditional, "[q]quit"));
        assert_eq!(normal.trim_end(), " sin modelo | Tradicional | [q]quit");

        let error = render_line(&Widget::error("test error"));
        assert_eq!(error.trim_end(), " Error: test error");

        let status = render_line(&Widget::status("test status"));
        assert_eq!(status.trim_end(), " test status");
    }

    #[test]
    fn test_to_paragraph_styles() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        RatatuiWidget::render(Widget::error("x").to_paragraph(), area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, colors::ACCENT_ERROR);
        assert_eq!(buf[(25, 0)].bg, colors::SURFACE);
    }
}
