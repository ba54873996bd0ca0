//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, row model)
//! - Main module - App struct and event loop
//!
//! The loop is single-threaded and synchronous: draw, poll for a key,
//! dispatch the mapped action, re-derive totals on the next draw.

mod state;

pub use state::{group_rows, AppMode, AppState, RowId};

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogGroup};
use crate::error::Result;
use crate::export;
use crate::input::{self, Action};
use crate::selection::Selection;
use crate::ui;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Main application struct
pub struct App {
    state: AppState,
    export_dir: PathBuf,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog, export_dir: PathBuf) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(catalog),
            export_dir,
            should_quit: false,
        }
    }

    /// Current application state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| ui::render(f, &self.state))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(action) = input::map_key(self.state.mode, key) {
                        self.dispatch(action);
                    }
                }
            }
        }
        info!("Event loop finished");
        Ok(())
    }

    /// Apply a single action to the application state.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatching action: {:?}", action);
        match action {
            Action::Quit => {
                if self.state.help_visible {
                    self.state.help_visible = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ToggleHelp => {
                self.state.help_visible = !self.state.help_visible;
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::NextGroup => self.switch_group(1),
            Action::PrevGroup => self.switch_group(-1),
            Action::Toggle => self.toggle_current(),
            Action::IncreaseQuantity => self.adjust_quantity(1),
            Action::DecreaseQuantity => self.adjust_quantity(-1),
            Action::ToggleSummary => {
                self.state.mode = match self.state.mode {
                    AppMode::Browse => AppMode::Summary,
                    AppMode::Summary => AppMode::Browse,
                };
            }
            Action::Export => self.export(),
        }
    }

    /// Whether the loop will exit before the next draw.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.state.current_rows().len();
        if len == 0 {
            return;
        }
        let cursor = self.state.cursor as i32 + delta;
        self.state.cursor = cursor.clamp(0, len as i32 - 1) as usize;
    }

    fn switch_group(&mut self, delta: i32) {
        let groups: Vec<CatalogGroup> = CatalogGroup::iter().collect();
        let index = self.state.group_index() as i32 + delta;
        let index = index.rem_euclid(groups.len() as i32) as usize;
        self.state.group = groups[index];
        self.state.cursor = 0;
    }

    fn toggle_current(&mut self) {
        let Some(row) = self.state.current_row() else {
            return;
        };
        let items = self.state.catalog.group(self.state.group);
        let item = items[row.item].clone();
        match row.add_on {
            None => {
                self.state.selection.toggle_item(&item);
                self.state.status_message = if self.state.selection.contains(&item.name) {
                    format!("Added {}", item.name)
                } else {
                    format!("Removed {}", item.name)
                };
            }
            Some(add_on_index) => {
                let add_on = item.add_ons[add_on_index].clone();
                self.state.selection.toggle_add_on(&item, &add_on);
                let key = Selection::entry_key(&add_on.name, Some(&item.name));
                self.state.status_message = if self.state.selection.contains(&key) {
                    format!("Added {}", add_on.name)
                } else {
                    format!("Removed {}", add_on.name)
                };
            }
        }
    }

    fn adjust_quantity(&mut self, delta: i32) {
        let Some(row) = self.state.current_row() else {
            return;
        };
        let items = self.state.catalog.group(self.state.group);
        let item = &items[row.item];
        let key = match row.add_on {
            None => Selection::entry_key(&item.name, None),
            Some(add_on_index) => {
                Selection::entry_key(&item.add_ons[add_on_index].name, Some(&item.name))
            }
        };
        self.state.selection.set_quantity(&key, delta);
    }

    fn export(&mut self) {
        if self.state.selection.is_empty() {
            self.state.status_message = "Nothing selected to export".to_string();
            return;
        }
        match export::write_snapshot(&self.export_dir, &self.state.selection) {
            Ok(path) => {
                info!("Snapshot exported to {}", path.display());
                self.state.status_message = format!("✓ Estimate exported to {}", path.display());
                self.state.last_export = Some(path);
            }
            Err(e) => {
                warn!("Snapshot export failed: {}", e);
                self.state.status_message = format!("✗ Export failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin(), PathBuf::from("."))
    }

    #[test]
    fn test_toggle_current_selects_item() {
        let mut app = app();
        app.dispatch(Action::Toggle);
        assert!(app.state().selection.contains("Static Page"));

        app.dispatch(Action::Toggle);
        assert!(app.state().selection.is_empty());
    }

    #[test]
    fn test_quantity_requires_selection() {
        let mut app = app();
        // Nothing selected: +/- are no-ops
        app.dispatch(Action::IncreaseQuantity);
        assert!(app.state().selection.is_empty());

        app.dispatch(Action::Toggle);
        app.dispatch(Action::IncreaseQuantity);
        app.dispatch(Action::IncreaseQuantity);
        assert_eq!(app.state().selection.get("Static Page").unwrap().quantity, 3);

        for _ in 0..10 {
            app.dispatch(Action::DecreaseQuantity);
        }
        assert_eq!(app.state().selection.get("Static Page").unwrap().quantity, 1);
    }

    #[test]
    fn test_group_switch_wraps_and_resets_cursor() {
        let mut app = app();
        app.dispatch(Action::MoveDown);
        assert_eq!(app.state().cursor, 1);

        app.dispatch(Action::NextGroup);
        assert_eq!(app.state().group, CatalogGroup::CustomCode);
        assert_eq!(app.state().cursor, 0);

        app.dispatch(Action::PrevGroup);
        app.dispatch(Action::PrevGroup);
        assert_eq!(app.state().group, CatalogGroup::Extras);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        for _ in 0..50 {
            app.dispatch(Action::MoveDown);
        }
        assert_eq!(app.state().cursor, app.state().current_rows().len() - 1);

        for _ in 0..50 {
            app.dispatch(Action::MoveUp);
        }
        assert_eq!(app.state().cursor, 0);
    }

    #[test]
    fn test_quit_closes_help_first() {
        let mut app = app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.state().help_visible);

        app.dispatch(Action::Quit);
        assert!(!app.state().help_visible);
        assert!(!app.should_quit());

        app.dispatch(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_export_with_empty_selection_is_refused() {
        let mut app = app();
        app.dispatch(Action::Export);
        assert!(app.state().status_message.contains("Nothing selected"));
        assert!(app.state().last_export.is_none());
    }

    #[test]
    fn test_export_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Catalog::builtin(), dir.path().to_path_buf());
        app.dispatch(Action::Toggle);
        app.dispatch(Action::Export);

        let path = app.state().last_export.clone().expect("snapshot path");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Static Page"));
    }
}
