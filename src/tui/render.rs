//! Frame rendering: header, model selector, mode toggle, status bar

use crate::app::App;
use crate::ui::{StatusBarWidget, colors};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Title shown on the header row.
pub const HEADER_TITLE: &str = " genpick ";

/// Rows reserved for the mode toggle pane.
///
/// Leaves room for medium buttons plus the busy hint inside the border.
pub const TOGGLE_HEIGHT: u16 = 6;

/// Regions of the full screen.
///
/// Rendering and mouse routing both derive their areas from this, so a
/// click always lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Header row
    pub header: Rect,
    /// Model selector pane
    pub selector: Rect,
    /// Mode toggle pane
    pub toggle: Rect,
    /// Status bar row
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Split the frame area into its panes
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [header, selector, toggle, status_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(TOGGLE_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            selector,
            toggle,
            status_bar,
        }
    }
}

/// Render the full application frame
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let layout = ScreenLayout::new(frame.area());

    frame.render_widget(header_line(app), layout.header);
    frame.render_widget(app.selector_widget(), layout.selector);
    frame.render_widget(app.toggle_widget(), layout.toggle);
    render_status_bar(frame, app, layout.status_bar);
}

fn header_line(app: &App) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        HEADER_TITLE,
        Style::default()
            .fg(colors::PRIMARY_FG)
            .bg(colors::PRIMARY_BG)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(name) = app.selected_model_name() {
        spans.push(Span::styled(
            format!(" {name}"),
            Style::default().fg(colors::TEXT_PRIMARY),
        ));
    }
    spans.push(Span::styled(
        format!("  Preguntas: {}", app.num_questions),
        Style::default().fg(colors::TEXT_DIM),
    ));
    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE))
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_bar = if let Some(ref error) = app.last_error {
        StatusBarWidget::error(error.clone())
    } else if let Some(ref status) = app.status_message {
        StatusBarWidget::status(status.clone())
    } else {
        StatusBarWidget::normal(
            app.selected_model_name(),
            app.mode(),
            app.config.keys.status_hints(),
        )
    };

    frame.render_widget(status_bar.to_paragraph(), area);
}
