//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application. Components should reference these constants rather than
//! hardcoding colors.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary accent color, used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color, used for selected items and emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Positive feedback, also used for "Free" price tags
    pub const SUCCESS: Color = Color::Green;

    /// Cursor row background
    pub const CURSOR_BG: Color = Color::Blue;

    /// Cursor row foreground
    pub const CURSOR_FG: Color = Color::White;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Block titles and group tabs
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Row under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .bg(Colors::CURSOR_BG)
            .fg(Colors::CURSOR_FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected (toggled on) catalog entries
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text: notes, time labels, hints
    pub fn muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Price tags
    pub fn price(amount: u64) -> Style {
        if amount == 0 {
            Style::default().fg(Colors::SUCCESS)
        } else {
            Style::default().fg(Colors::FG_PRIMARY)
        }
    }
}
