//! Named glyphs used inside buttons and badges

use ratatui::{style::Style, text::Span};

/// A named glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Arithmetic, used for the traditional suggestion mode.
    Calculator,
    /// Content analysis, used for the intelligent suggestion mode.
    Brain,
    /// Marks a suggestion that is already applied.
    Check,
}

impl Icon {
    /// The glyph text.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Calculator => "🧮",
            Self::Brain => "🧠",
            Self::Check => "✓",
        }
    }

    /// Render the glyph as a styled span.
    #[must_use]
    pub fn span(self, style: Style) -> Span<'static> {
        Span::styled(self.glyph(), style)
    }

    /// Display width of the glyph in terminal cells.
    #[must_use]
    pub fn width(self) -> u16 {
        u16::try_from(self.span(Style::default()).width()).unwrap_or(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_widths() {
        assert_eq!(Icon::Check.width(), 1);
        assert_eq!(Icon::Brain.width(), 2);
        assert_eq!(Icon::Calculator.width(), 2);
    }

    #[test]
    fn test_icon_glyphs_distinct() {
        assert_ne!(Icon::Calculator.glyph(), Icon::Brain.glyph());
        assert_eq!(Icon::Brain.glyph(), "🧠");
    }
}
