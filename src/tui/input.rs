//! Keyboard and mouse input handling

use super::render::ScreenLayout;
use crate::app::{Actions, App, Focus};
use ratatui::{
    crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};
use tracing::debug;

/// Dispatch a key press through the configured keybindings
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        app.clear_messages();
        Actions::new().handle_action(app, action);
    }
}

/// Handle a mouse event.
///
/// Only left clicks are handled. A click focuses the pane it lands in and is
/// then offered to that pane's widget.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        handle_left_click(app, mouse.column, mouse.row, frame_area);
    }
}

fn handle_left_click(app: &mut App, x: u16, y: u16, frame_area: Rect) {
    let layout = ScreenLayout::new(frame_area);
    let position = Position::new(x, y);

    if layout.selector.contains(position) {
        app.focus = Focus::Selector;
        if let Some(event) = app.selector_widget().handle_click(layout.selector, x, y) {
            debug!(?event, "Selector click");
            app.clear_messages();
            app.apply_selector_event(event);
        }
    } else if layout.toggle.contains(position) {
        app.focus = Focus::Toggle;
        if let Some(event) = app.toggle_widget().handle_click(layout.toggle, x, y) {
            debug!(?event, "Toggle click");
            app.clear_messages();
            app.apply_toggle_event(event);
        }
    }
}
