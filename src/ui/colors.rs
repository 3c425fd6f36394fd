//! Color palette for the pickers
//!
//! Muted chrome with one accent for the emphasized choice.

use ratatui::style::Color;

// UI Chrome
/// Default border color.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Border of the focused pane or keyboard-highlighted card.
pub const FOCUS: Color = Color::Rgb(100, 180, 220);
/// Background behind panes.
pub const SURFACE: Color = Color::Rgb(30, 32, 40);

// Text
/// Main text color.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text (descriptions, labels).
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Disabled or hint text.
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Buttons
/// Fill of a primary button.
pub const PRIMARY_BG: Color = Color::Rgb(100, 140, 200);
/// Label of a primary button.
pub const PRIMARY_FG: Color = Color::Rgb(20, 22, 30);

// Badges and status
/// Status badge background.
pub const BADGE_BG: Color = Color::Rgb(50, 55, 70);
/// Positive accent (checked boxes, confirmations).
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Warning accent (busy indicator).
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);
/// Error accent.
pub const ACCENT_ERROR: Color = Color::Rgb(200, 100, 100);
