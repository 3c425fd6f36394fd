//! Clickable button primitive

use super::icon::Icon;
use crate::ui::colors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled, used for the active choice.
    Primary,
    /// De-emphasized, used for inactive choices.
    #[default]
    Outline,
}

/// Button footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Single row, no border.
    #[default]
    Small,
    /// Three rows with a border.
    Medium,
}

impl Size {
    /// Rows occupied by a button of this size.
    #[must_use]
    pub const fn height(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 3,
        }
    }
}

/// A stylable, disable-able button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    icon: Option<Icon>,
    variant: Variant,
    size: Size,
    disabled: bool,
}

impl<'a> Button<'a> {
    /// Create an enabled, small, outline button.
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self {
            label,
            icon: None,
            variant: Variant::Outline,
            size: Size::Small,
            disabled: false,
        }
    }

    /// Show a glyph before the label.
    #[must_use]
    pub const fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the visual variant.
    #[must_use]
    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Mark the button as non-interactive.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the button accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// The current variant.
    #[must_use]
    pub const fn current_variant(&self) -> Variant {
        self.variant
    }

    /// Natural width in cells, including padding and border.
    #[must_use]
    pub fn width(&self) -> u16 {
        let content =
            u16::try_from(self.content_line(Style::default()).width()).unwrap_or(u16::MAX);
        match self.size {
            // Bracket or fill cell on each side.
            Size::Small => content.saturating_add(2),
            // Border plus one cell of padding on each side.
            Size::Medium => content.saturating_add(4),
        }
    }

    /// Natural height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.size.height()
    }

    /// Style applied to the label and, for primary buttons, the fill.
    #[must_use]
    pub fn style(&self) -> Style {
        match (self.variant, self.disabled) {
            (Variant::Primary, false) => Style::default()
                .fg(colors::PRIMARY_FG)
                .bg(colors::PRIMARY_BG)
                .add_modifier(Modifier::BOLD),
            (Variant::Primary, true) => Style::default()
                .fg(colors::TEXT_MUTED)
                .bg(colors::BADGE_BG)
                .add_modifier(Modifier::DIM),
            (Variant::Outline, false) => Style::default().fg(colors::TEXT_PRIMARY),
            (Variant::Outline, true) => Style::default()
                .fg(colors::TEXT_MUTED)
                .add_modifier(Modifier::DIM),
        }
    }

    fn border_style(&self) -> Style {
        match (self.variant, self.disabled) {
            (_, true) => Style::default().fg(colors::TEXT_MUTED),
            (Variant::Primary, false) => Style::default().fg(colors::PRIMARY_BG),
            (Variant::Outline, false) => Style::default().fg(colors::BORDER),
        }
    }

    fn content_line(&self, style: Style) -> Line<'a> {
        let mut spans = Vec::with_capacity(3);
        if let Some(icon) = self.icon {
            spans.push(icon.span(style));
            spans.push(Span::styled(" ", style));
        }
        spans.push(Span::styled(self.label, style));
        Line::from(spans)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.style();

        match self.size {
            Size::Small => {
                let row = Rect { height: 1, ..area };
                buf.set_style(row, style);
                if self.variant == Variant::Outline {
                    let bracket = self.border_style();
                    buf.set_string(row.x, row.y, "[", bracket);
                    let right = row.x.saturating_add(row.width.saturating_sub(1));
                    buf.set_string(right, row.y, "]", bracket);
                }
                let inner = Rect {
                    x: row.x.saturating_add(1),
                    width: row.width.saturating_sub(2),
                    ..row
                };
                Paragraph::new(self.content_line(style)).render(inner, buf);
            }
            Size::Medium => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style());
                if self.variant == Variant::Primary {
                    block = block.style(style);
                }
                let inner = block.inner(area);
                block.render(area, buf);
                let padded = Rect {
                    x: inner.x.saturating_add(1),
                    width: inner.width.saturating_sub(1),
                    ..inner
                };
                Paragraph::new(self.content_line(style)).render(padded, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_button_defaults() {
        let button = Button::new("Usar");
        assert!(button.is_enabled());
        assert_eq!(button.current_variant(), Variant::Outline);
        assert_eq!(button.height(), 1);
    }

    #[test]
    fn test_button_width_counts_icon_and_padding() {
        let plain = Button::new("Usar");
        assert_eq!(plain.width(), 6);

        // Brain is two cells wide, followed by a space.
        let with_icon = Button::new("Usar").icon(Icon::Brain);
        assert_eq!(with_icon.width(), 9);

        let medium = Button::new("Usar").size(Size::Medium);
        assert_eq!(medium.width(), 8);
        assert_eq!(medium.height(), 3);
    }

    #[test]
    fn test_small_outline_renders_brackets() {
        let button = Button::new("Usar");
        let area = Rect::new(0, 0, button.width(), 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "[Usar]");
    }

    #[test]
    fn test_small_primary_fills_background() {
        let button = Button::new("Usar").variant(Variant::Primary);
        let area = Rect::new(0, 0, button.width(), 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), " Usar ");
        assert_eq!(buf[(0, 0)].bg, colors::PRIMARY_BG);
        assert_eq!(buf[(2, 0)].bg, colors::PRIMARY_BG);
    }

    #[test]
    fn test_disabled_primary_is_muted() {
        let button = Button::new("Usar").variant(Variant::Primary).disabled(true);
        assert!(!button.is_enabled());
        assert_eq!(button.style().bg, Some(colors::BADGE_BG));
        assert_eq!(button.style().fg, Some(colors::TEXT_MUTED));
    }

    #[test]
    fn test_medium_renders_border() {
        let button = Button::new("Usar").size(Size::Medium);
        let area = Rect::new(0, 0, button.width(), 3);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert!(row_text(&buf, 1).contains("Usar"));
    }

    #[test]
    fn test_render_into_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        Button::new("Usar").render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row_text(&buf, 0), "    ");
    }
}
