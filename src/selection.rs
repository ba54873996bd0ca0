//! Selection aggregator
//!
//! Maps a catalog and a sequence of toggle/quantity events to a derived
//! summary: total price, total hours, total days. This is a pure,
//! synchronous, always-succeeding state container; invalid keys are
//! silently ignored.
//!
//! Keys follow the source data convention: `itemName` for top-level items,
//! `parentName-itemName` for add-ons.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{AddOn, Catalog, CatalogItem, TimeEstimate};
use crate::error::QuotientError;

/// Fixed conversion policy: 8 accumulated hours become 1 day.
pub const HOURS_PER_DAY: u64 = 8;

/// A single selected item with its quantity.
///
/// Entries snapshot the pricing fields of the catalog item they were
/// created from, so totals never need to re-resolve the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    /// Selection key (`name` or `parent-name`)
    pub key: String,
    /// Display name
    pub name: String,
    /// Unit price in whole BDT
    pub price_bdt: u64,
    /// Per-unit time estimate
    pub time: Option<TimeEstimate>,
    /// Whether quantity adjustments apply to this entry
    pub allow_quantity: bool,
    /// Quantity, always >= 1
    pub quantity: u32,
}

/// Aggregated totals over a selection, before time normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub price_bdt: u64,
    // u64: per-unit hours are small, but quantities can multiply them past
    // the u32 range
    pub hours: u64,
    pub days: u64,
}

impl Totals {
    /// Normalize accumulated time: every 8 hours becomes 1 day (floor
    /// division), the remainder stays as hours.
    pub fn normalized(&self) -> EffectiveTime {
        EffectiveTime {
            days: self.days + self.hours / HOURS_PER_DAY,
            hours: self.hours % HOURS_PER_DAY,
        }
    }
}

/// Delivery time after hour-to-day normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectiveTime {
    pub days: u64,
    pub hours: u64,
}

impl fmt::Display for EffectiveTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.days, self.hours) {
            (0, 0) => write!(f, "0h"),
            (d, 0) => write!(f, "{}d", d),
            (0, h) => write!(f, "{}h", h),
            (d, h) => write!(f, "{}d {}h", d, h),
        }
    }
}

/// The user's current set of chosen items with quantities.
///
/// Entries keep insertion order so the summary lists items in the order
/// they were picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Selection key for an item, composite when it has a parent.
    pub fn entry_key(name: &str, parent: Option<&str>) -> String {
        match parent {
            Some(parent) => format!("{}-{}", parent, name),
            None => name.to_string(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&SelectionEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Toggle a top-level item.
    ///
    /// Removing an item cascades removal to all of its add-ons, so an
    /// add-on can never outlive its parent in the selection.
    pub fn toggle_item(&mut self, item: &CatalogItem) {
        if self.contains(&item.name) {
            self.remove(&item.name);
            for add_on in &item.add_ons {
                let key = Self::entry_key(&add_on.name, Some(&item.name));
                self.remove(&key);
            }
        } else {
            self.entries.push(SelectionEntry {
                key: item.name.clone(),
                name: item.name.clone(),
                price_bdt: item.price_bdt,
                time: item.time(),
                allow_quantity: item.allow_quantity,
                quantity: 1,
            });
        }
    }

    /// Toggle an add-on under its parent item.
    ///
    /// Selecting an add-on auto-selects the parent if it is absent, so
    /// the parent invariant holds on insertion as well as removal.
    pub fn toggle_add_on(&mut self, parent: &CatalogItem, add_on: &AddOn) {
        let key = Self::entry_key(&add_on.name, Some(&parent.name));
        if self.contains(&key) {
            self.remove(&key);
        } else {
            if !self.contains(&parent.name) {
                self.toggle_item(parent);
            }
            self.entries.push(SelectionEntry {
                key,
                name: add_on.name.clone(),
                price_bdt: add_on.price_bdt,
                time: add_on.time(),
                allow_quantity: false,
                quantity: 1,
            });
        }
    }

    /// Adjust the quantity of a selected entry by `delta`, clamping the
    /// result to a minimum of 1.
    ///
    /// No-op if the key is not selected or the entry does not allow
    /// quantities.
    pub fn set_quantity(&mut self, key: &str, delta: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            if !entry.allow_quantity {
                return;
            }
            let updated = i64::from(entry.quantity) + i64::from(delta);
            entry.quantity = updated.clamp(1, i64::from(u32::MAX)) as u32;
        }
    }

    /// Sum price and time over all entries. Recomputed from scratch on
    /// every call; nothing is incrementally patched.
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in &self.entries {
            totals.price_bdt += entry.price_bdt * u64::from(entry.quantity);
            match entry.time {
                Some(TimeEstimate::Hours(h)) => {
                    totals.hours += u64::from(h) * u64::from(entry.quantity)
                }
                Some(TimeEstimate::Days(d)) => {
                    totals.days += u64::from(d) * u64::from(entry.quantity)
                }
                None => {}
            }
        }
        totals
    }

    /// Apply a parsed selection spec against a catalog.
    ///
    /// Used by the non-interactive `totals` command. Returns `false` when
    /// the spec does not resolve to a catalog entry.
    pub fn apply_spec(&mut self, catalog: &Catalog, spec: &SelectionSpec) -> bool {
        match &spec.parent {
            Some(parent_name) => {
                let Some(parent) = catalog.find_item(parent_name) else {
                    return false;
                };
                let Some(add_on) = parent.add_ons.iter().find(|a| a.name == spec.name) else {
                    return false;
                };
                self.toggle_add_on(parent, add_on);
                true
            }
            None => {
                let Some(item) = catalog.find_item(&spec.name) else {
                    return false;
                };
                self.toggle_item(item);
                if let Some(quantity) = spec.quantity {
                    // Assign directly; a delta would not survive the i32 cast
                    // for quantities past 2^31.
                    if let Some(entry) = self.entries.iter_mut().find(|e| e.key == item.name) {
                        if entry.allow_quantity {
                            entry.quantity = quantity;
                        }
                    }
                }
                true
            }
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
    }
}

/// A textual selection spec: `Item`, `Parent/Add-on`, or `Item=3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSpec {
    pub parent: Option<String>,
    pub name: String,
    pub quantity: Option<u32>,
}

impl FromStr for SelectionSpec {
    type Err = QuotientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, quantity) = match s.rsplit_once('=') {
            Some((path, qty)) => {
                let qty: u32 = qty.trim().parse().map_err(|_| {
                    QuotientError::general(format!("invalid quantity in selection: {}", s))
                })?;
                if qty < 1 {
                    return Err(QuotientError::general(format!(
                        "quantity must be at least 1: {}",
                        s
                    )));
                }
                (path, Some(qty))
            }
            None => (s, None),
        };
        let (parent, name) = match path.split_once('/') {
            Some((parent, name)) => (Some(parent.trim().to_string()), name.trim()),
            None => (None, path.trim()),
        };
        if name.is_empty() {
            return Err(QuotientError::general(format!(
                "empty item name in selection: {}",
                s
            )));
        }
        Ok(Self {
            parent,
            name: name.to_string(),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cms_page() -> CatalogItem {
        Catalog::builtin()
            .find_item("Dynamic Page (CMS)")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_toggle_inserts_and_removes() {
        let item = cms_page();
        let mut selection = Selection::new();

        selection.toggle_item(&item);
        assert!(selection.contains("Dynamic Page (CMS)"));

        selection.toggle_item(&item);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_add_on_auto_selects_parent() {
        let item = cms_page();
        let mut selection = Selection::new();

        selection.toggle_add_on(&item, &item.add_ons[0]);
        assert!(selection.contains("Dynamic Page (CMS)"));
        assert!(selection.contains("Dynamic Page (CMS)-Notion Database Sync"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_parent_removal_cascades() {
        let item = cms_page();
        let mut selection = Selection::new();

        selection.toggle_item(&item);
        selection.toggle_add_on(&item, &item.add_ons[0]);
        selection.toggle_item(&item);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let item = cms_page();
        let mut selection = Selection::new();
        selection.toggle_item(&item);

        selection.set_quantity("Dynamic Page (CMS)", -5);
        assert_eq!(selection.get("Dynamic Page (CMS)").unwrap().quantity, 1);

        selection.set_quantity("Dynamic Page (CMS)", 3);
        assert_eq!(selection.get("Dynamic Page (CMS)").unwrap().quantity, 4);
    }

    #[test]
    fn test_set_quantity_unknown_key_is_noop() {
        let mut selection = Selection::new();
        selection.set_quantity("Not Selected", 5);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_set_quantity_ignored_without_flag() {
        let catalog = Catalog::builtin();
        let consult = catalog.find_item("UX Consultation").unwrap();
        let mut selection = Selection::new();

        selection.toggle_item(consult);
        selection.set_quantity("UX Consultation", 3);
        assert_eq!(selection.get("UX Consultation").unwrap().quantity, 1);
    }

    #[test]
    fn test_totals_sum_price_and_time() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();

        let static_page = catalog.find_item("Static Page").unwrap();
        selection.toggle_item(static_page);
        selection.set_quantity("Static Page", 1); // quantity 2

        let research = catalog.find_item("UX Research Report").unwrap();
        selection.toggle_item(research);

        let totals = selection.totals();
        assert_eq!(totals.price_bdt, 3900 * 2 + 20000);
        assert_eq!(totals.hours, 8);
        assert_eq!(totals.days, 7);
    }

    #[test]
    fn test_normalization_ten_hours() {
        let totals = Totals {
            price_bdt: 0,
            hours: 10,
            days: 0,
        };
        let time = totals.normalized();
        assert_eq!(time.days, 1);
        assert_eq!(time.hours, 2);
    }

    #[test]
    fn test_normalization_adds_to_existing_days() {
        let totals = Totals {
            price_bdt: 0,
            hours: 17,
            days: 7,
        };
        let time = totals.normalized();
        assert_eq!(time.days, 9);
        assert_eq!(time.hours, 1);
    }

    #[test]
    fn test_effective_time_display() {
        assert_eq!(EffectiveTime { days: 0, hours: 0 }.to_string(), "0h");
        assert_eq!(EffectiveTime { days: 7, hours: 0 }.to_string(), "7d");
        assert_eq!(EffectiveTime { days: 0, hours: 3 }.to_string(), "3h");
        assert_eq!(EffectiveTime { days: 1, hours: 2 }.to_string(), "1d 2h");
    }

    #[test]
    fn test_selection_spec_parsing() {
        let spec: SelectionSpec = "Static Page".parse().unwrap();
        assert_eq!(spec.parent, None);
        assert_eq!(spec.name, "Static Page");
        assert_eq!(spec.quantity, None);

        let spec: SelectionSpec = "Static Page=3".parse().unwrap();
        assert_eq!(spec.quantity, Some(3));

        let spec: SelectionSpec = "Dynamic Page (CMS)/Notion Database Sync".parse().unwrap();
        assert_eq!(spec.parent.as_deref(), Some("Dynamic Page (CMS)"));
        assert_eq!(spec.name, "Notion Database Sync");

        assert!("Static Page=zero".parse::<SelectionSpec>().is_err());
        assert!("Static Page=0".parse::<SelectionSpec>().is_err());
        assert!("".parse::<SelectionSpec>().is_err());
    }

    #[test]
    fn test_apply_spec_preserves_large_quantities() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();

        let spec: SelectionSpec = "Static Page=3000000000".parse().unwrap();
        assert!(selection.apply_spec(&catalog, &spec));
        assert_eq!(
            selection.get("Static Page").unwrap().quantity,
            3_000_000_000
        );
    }

    #[test]
    fn test_set_quantity_saturates_at_u32_max() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();
        let spec: SelectionSpec = format!("Static Page={}", u32::MAX).parse().unwrap();
        selection.apply_spec(&catalog, &spec);

        selection.set_quantity("Static Page", 1);
        assert_eq!(selection.get("Static Page").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_apply_spec() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();

        let spec: SelectionSpec = "Static Page=2".parse().unwrap();
        assert!(selection.apply_spec(&catalog, &spec));
        assert_eq!(selection.get("Static Page").unwrap().quantity, 2);

        let spec: SelectionSpec = "Dynamic Page (CMS)/Notion Database Sync".parse().unwrap();
        assert!(selection.apply_spec(&catalog, &spec));
        assert!(selection.contains("Dynamic Page (CMS)"));

        let spec: SelectionSpec = "No Such Item".parse().unwrap();
        assert!(!selection.apply_spec(&catalog, &spec));
    }
}
