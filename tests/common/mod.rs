//! Common test utilities shared across integration tests

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Flatten a buffer into newline-separated rows of symbols.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Render `widget` into a fresh buffer covering `area`.
#[must_use]
pub fn render_widget(widget: impl Widget, area: Rect) -> Buffer {
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Every cell position inside `rect`.
pub fn cells(rect: Rect) -> impl Iterator<Item = (u16, u16)> {
    rect.positions().map(|p| (p.x, p.y))
}
