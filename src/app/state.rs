//! Application state definitions
//!
//! Contains all state-related types for the application including AppState,
//! AppMode, and the flattened row model used for cursor navigation.

use crate::catalog::{Catalog, CatalogGroup, CatalogItem};
use crate::selection::Selection;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Browsing the catalog; summary dock collapsed
    Browse,
    /// Summary dock expanded over the catalog
    Summary,
}

/// A row in the flattened catalog view: either a top-level item or one of
/// its add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId {
    /// Index of the top-level item within its group
    pub item: usize,
    /// Index into the item's add-ons, if this row is an add-on
    pub add_on: Option<usize>,
}

/// Flatten a group's items into navigable rows: each item followed by its
/// add-ons.
pub fn group_rows(items: &[CatalogItem]) -> Vec<RowId> {
    let mut rows = Vec::new();
    for (item, entry) in items.iter().enumerate() {
        rows.push(RowId {
            item,
            add_on: None,
        });
        for add_on in 0..entry.add_ons.len() {
            rows.push(RowId {
                item,
                add_on: Some(add_on),
            });
        }
    }
    rows
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The catalog supplied at startup
    pub catalog: Catalog,
    /// Current selection with quantities
    pub selection: Selection,
    /// Active catalog group
    pub group: CatalogGroup,
    /// Cursor position within the active group's flattened rows
    pub cursor: usize,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Path of the most recent snapshot export
    pub last_export: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            mode: AppMode::Browse,
            catalog,
            selection: Selection::new(),
            group: CatalogGroup::Pages,
            cursor: 0,
            help_visible: false,
            status_message: "Select items to build your estimate".to_string(),
            last_export: None,
        }
    }

    /// Rows of the active group.
    pub fn current_rows(&self) -> Vec<RowId> {
        group_rows(self.catalog.group(self.group))
    }

    /// Row under the cursor, if the group is non-empty.
    pub fn current_row(&self) -> Option<RowId> {
        self.current_rows().get(self.cursor).copied()
    }

    /// Index of the active group within display order.
    pub fn group_index(&self) -> usize {
        CatalogGroup::iter()
            .position(|g| g == self.group)
            .unwrap_or(0)
    }

    /// Keep the cursor inside the active group's rows.
    pub fn clamp_cursor(&mut self) {
        let len = self.current_rows().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
