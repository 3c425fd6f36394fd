//! Suggestion mode toggle widget
//!
//! Two mutually exclusive buttons, "Tradicional" and "Inteligente", drawn from
//! a flag the owner keeps. Clicking either enabled button asks the owner to
//! change modes; the widget itself never flips the flag.
//!
//! In traditional mode a second row shows the suggested question count with a
//! "Usar" button that asks the owner to adopt it.

use super::button::{Button, Size, Variant};
use super::icon::Icon;
use crate::ui::colors;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget as RatatuiWidget},
};
use serde::{Deserialize, Serialize};

/// Label preceding the buttons.
pub const METHOD_LABEL: &str = "Método: ";

/// Label of the traditional mode button.
pub const TRADITIONAL_LABEL: &str = "Tradicional";

/// Label of the intelligent mode button.
pub const INTELLIGENT_LABEL: &str = "Inteligente";

/// Status text shown while the intelligent mode is active.
pub const STATUS_LABEL: &str = "Análisis de contenido";

/// Hint shown while the owner is busy.
pub const LOADING_LABEL: &str = "Analizando contenido...";

/// Prefix of the suggested question count.
pub const SUGGESTED_LABEL: &str = "Sugerido: ";

/// Label of the button adopting the suggested count.
pub const USE_SUGGESTED_LABEL: &str = "Usar";

const TITLE: &str = " Sugerencias ";
const BUTTON_GAP: u16 = 1;
const STATUS_GAP: u16 = 2;

/// How question counts are suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionMode {
    /// One question per configured number of words of source text.
    #[default]
    Traditional,
    /// Content analysis by the generation backend.
    Intelligent,
}

impl SuggestionMode {
    /// Mode for an intelligent flag.
    #[must_use]
    pub const fn from_flag(use_intelligent: bool) -> Self {
        if use_intelligent {
            Self::Intelligent
        } else {
            Self::Traditional
        }
    }

    /// Whether this is the intelligent mode.
    #[must_use]
    pub const fn is_intelligent(self) -> bool {
        matches!(self, Self::Intelligent)
    }

    /// The other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Traditional => Self::Intelligent,
            Self::Intelligent => Self::Traditional,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Traditional => TRADITIONAL_LABEL,
            Self::Intelligent => INTELLIGENT_LABEL,
        }
    }

    const fn icon(self) -> Icon {
        match self {
            Self::Traditional => Icon::Calculator,
            Self::Intelligent => Icon::Brain,
        }
    }
}

/// Intent reported by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One of the mode buttons was clicked while enabled.
    ToggleRequested {
        /// The button that was clicked.
        clicked: SuggestionMode,
    },
    /// The "Usar" button was clicked while the count differs from the suggestion.
    UseSuggestedRequested {
        /// The suggested count shown next to the button.
        count: u32,
    },
}

/// Traditional suggestion shown under the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Suggested number of questions.
    pub count: u32,
    /// Whether the owner's count already equals the suggestion.
    pub applied: bool,
}

/// Screen regions of a rendered toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLayout {
    /// The traditional mode button.
    pub traditional: Rect,
    /// The intelligent mode button.
    pub intelligent: Rect,
    /// The status badge, present only in intelligent mode.
    pub status: Option<Rect>,
    /// Row for the busy hint, present only while loading.
    pub hint: Option<Rect>,
    /// The "Sugerido: N" text, present only in traditional mode when idle.
    pub suggested: Option<Rect>,
    /// The "Usar" button next to the suggested count.
    pub use_suggested: Option<Rect>,
    /// Button size chosen for the available height.
    pub size: Size,
}

/// Widget rendering the two mode buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widget {
    use_intelligent: bool,
    loading: bool,
    focused: bool,
    suggestion: Option<Suggestion>,
}

impl Widget {
    /// Create a toggle reflecting `use_intelligent`; not loading.
    #[must_use]
    pub const fn new(use_intelligent: bool) -> Self {
        Self {
            use_intelligent,
            loading: false,
            focused: false,
            suggestion: None,
        }
    }

    /// Show the toggle as busy; both buttons become inert.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether the toggle pane has keyboard focus.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Traditional suggestion to show; ignored in intelligent mode.
    #[must_use]
    pub const fn suggestion(mut self, suggestion: Option<Suggestion>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// The mode currently reflected.
    #[must_use]
    pub const fn mode(&self) -> SuggestionMode {
        SuggestionMode::from_flag(self.use_intelligent)
    }

    /// The button drawn for `mode`, with its emphasis and enabled state.
    #[must_use]
    pub const fn button(&self, mode: SuggestionMode, size: Size) -> Button<'static> {
        let variant = if mode.is_intelligent() == self.use_intelligent {
            Variant::Primary
        } else {
            Variant::Outline
        };
        Button::new(mode.label())
            .icon(mode.icon())
            .variant(variant)
            .size(size)
            .disabled(self.loading)
    }

    /// The "Usar" button; disabled once the suggestion is applied.
    #[must_use]
    pub const fn use_button(&self, applied: bool) -> Button<'static> {
        let button = Button::new(USE_SUGGESTED_LABEL)
            .variant(Variant::Outline)
            .size(Size::Small)
            .disabled(applied || self.loading);
        if applied {
            button.icon(Icon::Check)
        } else {
            button
        }
    }

    const fn shown_suggestion(&self) -> Option<Suggestion> {
        if self.use_intelligent || self.loading {
            None
        } else {
            self.suggestion
        }
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

    /// Compute where the buttons, badge, and hint land inside `area`.
    #[must_use]
    pub fn layout(&self, area: Rect) -> ToggleLayout {
        let inner = self.block().inner(area);
        let size = if inner.height > Size::Medium.height() {
            Size::Medium
        } else {
            Size::Small
        };
        let height = size.height();

        let traditional_button = self.button(SuggestionMode::Traditional, size);
        let intelligent_button = self.button(SuggestionMode::Intelligent, size);

        let label_width = text_width(METHOD_LABEL);
        let traditional_x = inner.x.saturating_add(label_width);
        let traditional = Rect::new(traditional_x, inner.y, traditional_button.width(), height)
            .intersection(inner);
        let intelligent_x = traditional_x
            .saturating_add(traditional_button.width())
            .saturating_add(BUTTON_GAP);
        let intelligent = Rect::new(intelligent_x, inner.y, intelligent_button.width(), height)
            .intersection(inner);

        let status = self.use_intelligent.then(|| {
            let x = intelligent_x
                .saturating_add(intelligent_button.width())
                .saturating_add(STATUS_GAP);
            let y = inner.y.saturating_add(height.saturating_sub(1) / 2);
            Rect::new(x, y, status_line().width().try_into().unwrap_or(u16::MAX), 1)
                .intersection(inner)
        });

        let second_row =
            Rect::new(inner.x, inner.y.saturating_add(height), inner.width, 1).intersection(inner);
        let hint = self.loading.then_some(second_row);

        let (suggested, use_suggested) = match self.shown_suggestion() {
            Some(suggestion) if !second_row.is_empty() => {
                let text = Rect {
                    width: text_width(&suggested_text(suggestion.count)),
                    ..second_row
                }
                .intersection(second_row);
                let button_x = text.right().saturating_add(BUTTON_GAP);
                let button = Rect::new(
                    button_x,
                    second_row.y,
                    self.use_button(suggestion.applied).width(),
                    1,
                )
                .intersection(second_row);
                (Some(text), Some(button))
            }
            _ => (None, None),
        };

        ToggleLayout {
            traditional,
            intelligent,
            status,
            hint,
            suggested,
            use_suggested,
            size,
        }
    }

    /// Translate a click at `(x, y)` into an event, if it hit an enabled button.
    ///
    /// `area` must be the same area the widget was rendered into.
    #[must_use]
    pub fn handle_click(&self, area: Rect, x: u16, y: u16) -> Option<Event> {
        if self.loading {
            return None;
        }
        let layout = self.layout(area);
        let position = Position::new(x, y);

        if layout.traditional.contains(position) {
            Some(Event::ToggleRequested {
                clicked: SuggestionMode::Traditional,
            })
        } else if layout.intelligent.contains(position) {
            Some(Event::ToggleRequested {
                clicked: SuggestionMode::Intelligent,
            })
        } else if let Some(button) = layout.use_suggested
            && button.contains(position)
            && let Some(suggestion) = self.shown_suggestion()
            && !suggestion.applied
        {
            Some(Event::UseSuggestedRequested {
                count: suggestion.count,
            })
        } else {
            None
        }
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn suggested_text(count: u32) -> String {
    format!("{SUGGESTED_LABEL}{count}")
}

fn status_line() -> Line<'static> {
    let style = Style::default()
        .fg(colors::TEXT_PRIMARY)
        .bg(colors::BADGE_BG);
    Line::from(vec![
        Span::styled(" ", style),
        Icon::Brain.span(style),
        Span::styled(" ", style),
        Span::styled(STATUS_LABEL, style),
        Span::styled(" ", style),
    ])
}

impl RatatuiWidget for Widget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.block().render(area, buf);
        let inner = self.block().inner(area);
        if inner.is_empty() {
            return;
        }

        let label_row = Rect {
            y: inner
                .y
                .saturating_add(layout.size.height().saturating_sub(1) / 2),
            height: 1,
            ..inner
        };
        Paragraph::new(Span::styled(
            METHOD_LABEL,
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
        .render(label_row, buf);

        self.button(SuggestionMode::Traditional, layout.size)
            .render(layout.traditional, buf);
        self.button(SuggestionMode::Intelligent, layout.size)
            .render(layout.intelligent, buf);

        if let Some(status) = layout.status {
            Paragraph::new(status_line()).render(status, buf);
        }

        if let Some(hint) = layout.hint {
            Paragraph::new(Span::styled(
                LOADING_LABEL,
                Style::default()
                    .fg(colors::ACCENT_WARNING)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(hint, buf);
        }

        if let (Some(text), Some(button), Some(suggestion)) =
            (layout.suggested, layout.use_suggested, self.shown_suggestion())
        {
            Paragraph::new(Span::styled(
                suggested_text(suggestion.count),
                Style::default().fg(colors::TEXT_PRIMARY),
            ))
            .render(text, buf);
            self.use_button(suggestion.applied).render(button, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(widget: Widget, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        RatatuiWidget::render(widget, area, &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_suggestion_mode_helpers() {
        assert_eq!(SuggestionMode::from_flag(true), SuggestionMode::Intelligent);
        assert_eq!(SuggestionMode::from_flag(false), SuggestionMode::Traditional);
        assert_eq!(
            SuggestionMode::Traditional.flipped(),
            SuggestionMode::Intelligent
        );
        assert_eq!(
            SuggestionMode::Intelligent.flipped(),
            SuggestionMode::Traditional
        );
        assert!(SuggestionMode::Intelligent.is_intelligent());
        assert_eq!(SuggestionMode::default(), SuggestionMode::Traditional);
    }

    #[test]
    fn test_suggestion_mode_serde() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&SuggestionMode::Intelligent)?;
        assert_eq!(json, "\"intelligent\"");
        let parsed: SuggestionMode = serde_json::from_str("\"traditional\"")?;
        assert_eq!(parsed, SuggestionMode::Traditional);
        Ok(())
    }

    #[test]
    fn test_emphasis_follows_flag() {
        let traditional = Widget::new(false);
        assert_eq!(
            traditional
                .button(SuggestionMode::Traditional, Size::Small)
                .current_variant(),
            Variant::Primary
        );
        assert_eq!(
            traditional
                .button(SuggestionMode::Intelligent, Size::Small)
                .current_variant(),
            Variant::Outline
        );

        let intelligent = Widget::new(true);
        assert_eq!(
            intelligent
                .button(SuggestionMode::Traditional, Size::Small)
                .current_variant(),
            Variant::Outline
        );
        assert_eq!(
            intelligent
                .button(SuggestionMode::Intelligent, Size::Small)
                .current_variant(),
            Variant::Primary
        );
    }

    #[test]
    fn test_loading_disables_both_buttons() {
        let widget = Widget::new(true).loading(true);
        assert!(!widget.button(SuggestionMode::Traditional, Size::Small).is_enabled());
        assert!(!widget.button(SuggestionMode::Intelligent, Size::Small).is_enabled());
    }

    #[test]
    fn test_layout_picks_size_from_height() {
        let small = Widget::new(false).layout(Rect::new(0, 0, 80, 3));
        assert_eq!(small.size, Size::Small);
        assert_eq!(small.traditional.height, 1);

        let medium = Widget::new(false).layout(Rect::new(0, 0, 80, 6));
        assert_eq!(medium.size, Size::Medium);
        assert_eq!(medium.traditional.height, 3);
    }

    #[test]
    fn test_layout_buttons_side_by_side() {
        let layout = Widget::new(false).layout(Rect::new(0, 0, 80, 3));
        assert_eq!(layout.traditional.x, 1 + text_width(METHOD_LABEL));
        assert!(layout.traditional.right() < layout.intelligent.x);
        assert_eq!(layout.status, None);
        assert_eq!(layout.hint, None);
    }

    #[test]
    fn test_status_badge_only_when_intelligent() {
        let area = Rect::new(0, 0, 80, 4);
        let on = buffer_text(&render(Widget::new(true), area));
        assert!(on.contains(STATUS_LABEL));
        assert!(on.contains(Icon::Brain.glyph()));

        let off = buffer_text(&render(Widget::new(false), area));
        assert!(!off.contains(STATUS_LABEL));
    }

    #[test]
    fn test_render_labels() {
        let text = buffer_text(&render(Widget::new(false), Rect::new(0, 0, 80, 3)));
        assert!(text.contains("Método:"));
        assert!(text.contains(TRADITIONAL_LABEL));
        assert!(text.contains(INTELLIGENT_LABEL));
        assert!(text.contains("Sugerencias"));
    }

    #[test]
    fn test_loading_hint_rendered() {
        let area = Rect::new(0, 0, 80, 4);
        let text = buffer_text(&render(Widget::new(false).loading(true), area));
        assert!(text.contains(LOADING_LABEL));
    }

    #[test]
    fn test_primary_button_is_filled() {
        let area = Rect::new(0, 0, 80, 3);
        let widget = Widget::new(true);
        let layout = widget.layout(area);
        let buf = render(widget, area);
        assert_eq!(
            buf[(layout.intelligent.x, layout.intelligent.y)].bg,
            colors::PRIMARY_BG
        );
        assert_ne!(
            buf[(layout.traditional.x, layout.traditional.y)].bg,
            colors::PRIMARY_BG
        );
    }

    #[test]
    fn test_click_either_button_requests_toggle() {
        let area = Rect::new(0, 0, 80, 3);
        let widget = Widget::new(false);
        let layout = widget.layout(area);
        assert_eq!(
            widget.handle_click(area, layout.traditional.x, layout.traditional.y),
            Some(Event::ToggleRequested {
                clicked: SuggestionMode::Traditional
            })
        );
        assert_eq!(
            widget.handle_click(area, layout.intelligent.x, layout.intelligent.y),
            Some(Event::ToggleRequested {
                clicked: SuggestionMode::Intelligent
            })
        );
    }

    #[test]
    fn test_click_while_loading_is_ignored() {
        let area = Rect::new(0, 0, 80, 3);
        let widget = Widget::new(false).loading(true);
        let layout = widget.layout(area);
        assert_eq!(
            widget.handle_click(area, layout.traditional.x, layout.traditional.y),
            None
        );
        assert_eq!(
            widget.handle_click(area, layout.intelligent.x, layout.intelligent.y),
            None
        );
    }

    const PENDING: Suggestion = Suggestion {
        count: 3,
        applied: false,
    };

    #[test]
    fn test_suggested_count_rendered_in_traditional_mode() {
        let area = Rect::new(0, 0, 80, 6);
        let widget = Widget::new(false).suggestion(Some(PENDING));
        let text = buffer_text(&render(widget, area));
        assert!(text.contains("Sugerido: 3"));
        assert!(text.contains("[Usar]"));

        let layout = widget.layout(area);
        let button = layout.use_suggested.unwrap_or_default();
        assert_eq!(button.y, layout.traditional.bottom());
        assert!(layout.suggested.unwrap_or_default().right() < button.x);
    }

    #[test]
    fn test_suggestion_hidden_in_intelligent_mode_and_while_loading() {
        let area = Rect::new(0, 0, 80, 6);
        for widget in [
            Widget::new(true).suggestion(Some(PENDING)),
            Widget::new(false).suggestion(Some(PENDING)).loading(true),
        ] {
            let layout = widget.layout(area);
            assert_eq!(layout.suggested, None);
            assert_eq!(layout.use_suggested, None);
            assert!(!buffer_text(&render(widget, area)).contains(SUGGESTED_LABEL));
        }
    }

    #[test]
    fn test_suggestion_needs_a_second_row() {
        let widget = Widget::new(false).suggestion(Some(PENDING));
        assert_eq!(widget.layout(Rect::new(0, 0, 80, 3)).use_suggested, None);
        assert!(widget.layout(Rect::new(0, 0, 80, 4)).use_suggested.is_some());
    }

    #[test]
    fn test_click_use_requests_suggested_count() {
        let area = Rect::new(0, 0, 80, 6);
        let widget = Widget::new(false).suggestion(Some(PENDING));
        let button = widget.layout(area).use_suggested.unwrap_or_default();
        assert_eq!(
            widget.handle_click(area, button.x, button.y),
            Some(Event::UseSuggestedRequested { count: 3 })
        );
    }

    #[test]
    fn test_applied_suggestion_disables_use() {
        let area = Rect::new(0, 0, 80, 6);
        let widget = Widget::new(false).suggestion(Some(Suggestion {
            count: 3,
            applied: true,
        }));
        assert!(!widget.use_button(true).is_enabled());
        let button = widget.layout(area).use_suggested.unwrap_or_default();
        assert_eq!(widget.handle_click(area, button.x, button.y), None);
        assert!(buffer_text(&render(widget, area)).contains(Icon::Check.glyph()));
    }

    #[test]
    fn test_click_on_label_or_badge_is_ignored() {
        let area = Rect::new(0, 0, 80, 3);
        let widget = Widget::new(true);
        let layout = widget.layout(area);
        assert_eq!(widget.handle_click(area, 1, 1), None);
        let status = layout.status.unwrap_or_default();
        assert_eq!(widget.handle_click(area, status.x, status.y), None);
    }
}
