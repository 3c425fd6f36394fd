//! Model selector widget
//!
//! Renders the model catalog as a grid of cards plus two preference
//! checkboxes. The widget keeps no selection of its own: clicks are
//! translated into [`Event`]s and the owner decides what to do with them.

use crate::catalog::{CATALOG, ModelOption};
use crate::ui::colors;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget as RatatuiWidget, Wrap},
};

/// Rows taken by one card: border, name, two description lines, border.
pub const CARD_HEIGHT: u16 = 5;

/// Label of the detailed-feedback checkbox.
pub const DETAILED_FEEDBACK_LABEL: &str = "Retroalimentación detallada";

/// Label of the mnemonic-rules checkbox.
pub const MNEMONIC_RULES_LABEL: &str = "Reglas mnemotécnicas";

const TITLE: &str = " Modelo de IA ";

/// Intent reported by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A model card was clicked; carries the option's id.
    ModelSelected(&'static str),
    /// The detailed-feedback checkbox was clicked; carries the requested value.
    DetailedFeedbackChanged(bool),
    /// The mnemonic-rules checkbox was clicked; carries the requested value.
    MnemonicRulesChanged(bool),
}

/// Screen regions of a rendered selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLayout {
    /// One rect per catalog entry, in catalog order. Cards that fall
    /// outside the available area are empty.
    pub cards: Vec<Rect>,
    /// Clickable region of the detailed-feedback checkbox.
    pub detailed_feedback: Rect,
    /// Clickable region of the mnemonic-rules checkbox.
    pub mnemonic_rules: Rect,
}

/// Number of grid columns for a given inner width.
#[must_use]
pub const fn columns_for_width(width: u16) -> u16 {
    if width < 60 {
        1
    } else if width < 96 {
        2
    } else {
        3
    }
}

/// Widget rendering the model catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widget<'a> {
    detailed_feedback: bool,
    mnemonic_rules: bool,
    highlighted: Option<&'a str>,
    focused: bool,
}

impl<'a> Widget<'a> {
    /// Create a selector with both preferences unchecked.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            detailed_feedback: false,
            mnemonic_rules: false,
            highlighted: None,
            focused: false,
        }
    }

    /// Current value of the detailed-feedback preference.
    #[must_use]
    pub const fn detailed_feedback(mut self, checked: bool) -> Self {
        self.detailed_feedback = checked;
        self
    }

    /// Current value of the mnemonic-rules preference.
    #[must_use]
    pub const fn mnemonic_rules(mut self, checked: bool) -> Self {
        self.mnemonic_rules = checked;
        self
    }

    /// Draw a keyboard-focus marker on the card with this id.
    #[must_use]
    pub const fn highlighted(mut self, id: Option<&'a str>) -> Self {
        self.highlighted = id;
        self
    }

    /// Whether the selector pane has keyboard focus.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'static> {
        let border = if self.focused {
            colors::FOCUS
        } else {
            colors::BORDER
        };
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
    }

    /// Compute where each card and checkbox lands inside `area`.
    #[must_use]
    pub fn layout(&self, area: Rect) -> SelectorLayout {
        let inner = self.block().inner(area);
        let [grid, _, feedback_row, mnemonic_row] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let columns = columns_for_width(grid.width);
        let column_constraints = (0..columns).map(|_| Constraint::Ratio(1, u32::from(columns)));
        let row_count = CATALOG.len().div_ceil(usize::from(columns));

        let mut cards = Vec::with_capacity(CATALOG.len());
        for row in 0..row_count {
            let offset = u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_mul(CARD_HEIGHT);
            let y = grid.y.saturating_add(offset);
            let row_rect = if y < grid.bottom() {
                Rect {
                    x: grid.x,
                    y,
                    width: grid.width,
                    height: CARD_HEIGHT.min(grid.bottom() - y),
                }
            } else {
                Rect::default()
            };
            let cells = Layout::horizontal(column_constraints.clone()).split(row_rect);
            let remaining = CATALOG.len() - cards.len();
            cards.extend(cells.iter().take(remaining).copied());
        }

        SelectorLayout {
            cards,
            detailed_feedback: checkbox_rect(feedback_row, DETAILED_FEEDBACK_LABEL),
            mnemonic_rules: checkbox_rect(mnemonic_row, MNEMONIC_RULES_LABEL),
        }
    }

    /// Translate a click at `(x, y)` into an event, if it hit anything.
    ///
    /// `area` must be the same area the widget was rendered into.
    #[must_use]
    pub fn handle_click(&self, area: Rect, x: u16, y: u16) -> Option<Event> {
        let layout = self.layout(area);
        let position = Position::new(x, y);

        if let Some(index) = layout.cards.iter().position(|card| card.contains(position)) {
            return CATALOG.get(index).map(|option| Event::ModelSelected(option.id));
        }
        if layout.detailed_feedback.contains(position) {
            return Some(Event::DetailedFeedbackChanged(!self.detailed_feedback));
        }
        if layout.mnemonic_rules.contains(position) {
            return Some(Event::MnemonicRulesChanged(!self.mnemonic_rules));
        }
        None
    }

    fn render_card(&self, option: &ModelOption, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let is_highlighted = self.highlighted == Some(option.id);
        let border = if is_highlighted {
            colors::FOCUS
        } else {
            colors::BORDER
        };
        let marker = if is_highlighted { "▶ " } else { "" };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(colors::FOCUS)),
                Span::styled(
                    option.name,
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                option.description,
                Style::default().fg(colors::TEXT_DIM),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

fn checkbox_rect(row: Rect, label: &str) -> Rect {
    let text_width = checkbox_line(label, false).width();
    Rect {
        width: u16::try_from(text_width).unwrap_or(u16::MAX).min(row.width),
        ..row
    }
}

fn checkbox_line(label: &str, checked: bool) -> Line<'_> {
    let (mark, mark_style) = if checked {
        ("[x] ", Style::default().fg(colors::ACCENT_POSITIVE))
    } else {
        ("[ ] ", Style::default().fg(colors::TEXT_DIM))
    };
    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(label, Style::default().fg(colors::TEXT_PRIMARY)),
    ])
}

impl RatatuiWidget for Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.block().render(area, buf);

        for (option, card) in CATALOG.iter().zip(&layout.cards) {
            self.render_card(option, *card, buf);
        }

        Paragraph::new(checkbox_line(DETAILED_FEEDBACK_LABEL, self.detailed_feedback))
            .render(layout.detailed_feedback, buf);
        Paragraph::new(checkbox_line(MNEMONIC_RULES_LABEL, self.mnemonic_rules))
            .render(layout.mnemonic_rules, buf);
    }
}
