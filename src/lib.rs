//! Quotient Library
//!
//! Core functionality for the quotient terminal pricing calculator: the
//! catalog data model, the selection aggregator, the TUI application, and
//! the snapshot exporter.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod input;
pub mod selection;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use catalog::{AddOn, Catalog, CatalogGroup, CatalogItem, TimeEstimate};
pub use error::QuotientError;
pub use input::Action;
pub use selection::{
    EffectiveTime, Selection, SelectionEntry, SelectionSpec, Totals, HOURS_PER_DAY,
};
