//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Group tab bar, nav bar, and help overlay
//! - `catalog` - Grouped catalog list with selection markers
//! - `summary` - Summary dock (collapsed totals / expanded line items)

mod catalog;
mod header;
mod summary;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{AppMode, AppState};

/// Height of the collapsed summary dock.
const DOCK_COLLAPSED: u16 = 3;
/// Height of the expanded summary dock.
const DOCK_EXPANDED: u16 = 14;

/// Render the complete UI based on application state.
pub fn render(f: &mut Frame, state: &AppState) {
    let dock_height = match state.mode {
        AppMode::Browse => DOCK_COLLAPSED,
        AppMode::Summary => DOCK_EXPANDED,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Group tabs
            Constraint::Min(8),              // Catalog
            Constraint::Length(dock_height), // Summary dock
            Constraint::Length(1),           // Navigation bar
        ])
        .split(f.area());

    header::render_tabs(f, state, chunks[0]);
    catalog::render_group(f, state, chunks[1]);
    summary::render_dock(f, state, chunks[2]);
    header::render_nav_bar(f, state, chunks[3]);

    // Help overlay goes on top of everything
    if state.help_visible {
        header::render_help_overlay(f);
    }
}
