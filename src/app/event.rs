//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::{Duration, Instant};

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Terminal tick (drives the busy countdown)
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Whether a tick is owed after `elapsed` time since the last one.
#[must_use]
pub const fn tick_due(elapsed: Duration, tick_rate: Duration) -> bool {
    elapsed.as_nanos() >= tick_rate.as_nanos()
}

/// Handler that polls for terminal events and emits ticks on a fixed cadence
///
/// Ticks are deadline based: a steady stream of input cannot postpone them.
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
    last_tick: Instant,
    /// Input read in the same poll that found a tick due
    pending: Option<Event>,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
            pending: None,
        }
    }

    /// Wait for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&mut self) -> Result<Event> {
        loop {
            if let Some(event) = self.pending.take() {
                return Ok(event);
            }
            let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
            let input = if event::poll(timeout)? {
                translate(event::read()?)
            } else {
                None
            };
            if let Some(event) = self.resolve(input, Instant::now()) {
                return Ok(event);
            }
        }
    }

    /// Decide what to emit at `now` given the input read, if any.
    ///
    /// A due tick wins and the input is held for the following call.
    fn resolve(&mut self, input: Option<Event>, now: Instant) -> Option<Event> {
        if tick_due(now.saturating_duration_since(self.last_tick), self.tick_rate) {
            self.last_tick = now;
            self.pending = input;
            return Some(Event::Tick);
        }
        input
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}

fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        // Key releases would double every action on terminals that report them
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
