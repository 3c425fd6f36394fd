//! Terminal user interface for genpick

mod input;
mod render;

pub use input::{handle_key_event, handle_mouse_event};
pub use render::{HEADER_TITLE, ScreenLayout, TOGGLE_HEIGHT, render};

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::{debug, info};

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("TUI started");
    let event_handler = Handler::new(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, &mut app, event_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!(model = ?app.selected_model, mode = ?app.mode(), "TUI stopped");

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut event_handler: Handler,
) -> Result<()> {
    loop {
        let mut frame_area = Rect::default();
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(frame, app);
        })?;

        match event_handler.next()? {
            Event::Tick => app.tick(),
            Event::Key(key) => handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, frame_area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
