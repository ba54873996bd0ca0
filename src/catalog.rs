//! Catalog data model
//!
//! The catalog is the static list of purchasable services and add-ons,
//! organized into three named groups. It is supplied at startup, either
//! from the built-in data set or from a JSON file with the same shape.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum::{Display, EnumIter};

use crate::error::{QuotientError, Result};

/// Delivery time estimate for a catalog entry.
///
/// Hours and days are tracked separately until totals are normalized;
/// a single entry carries at most one of the two denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEstimate {
    Hours(u32),
    Days(u32),
}

impl TimeEstimate {
    /// Short display label, e.g. `4h` or `7d`.
    pub fn label(&self) -> String {
        match self {
            Self::Hours(h) => format!("{}h", h),
            Self::Days(d) => format!("{}d", d),
        }
    }

    fn from_fields(hours: Option<u32>, days: Option<u32>) -> Option<Self> {
        match (hours, days) {
            (Some(h), None) => Some(Self::Hours(h)),
            (None, Some(d)) => Some(Self::Days(d)),
            _ => None,
        }
    }
}

/// Optional add-on attached to a top-level catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Display name, unique within its parent
    pub name: String,
    /// Price in whole BDT
    pub price_bdt: u64,
    /// Short description shown alongside the item
    #[serde(default)]
    pub notes: String,
    /// Icon reference carried from the source data; not rendered in the TUI
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_days: Option<u32>,
}

impl AddOn {
    pub fn new(name: &str, price_bdt: u64, notes: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            price_bdt,
            notes: notes.to_string(),
            icon: icon.to_string(),
            time_hours: None,
            time_days: None,
        }
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.time_hours = Some(hours);
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.time_days = Some(days);
        self
    }

    /// Time estimate, if exactly one denomination is set.
    pub fn time(&self) -> Option<TimeEstimate> {
        TimeEstimate::from_fields(self.time_hours, self.time_days)
    }
}

/// Top-level catalog item, optionally carrying add-ons and a quantity flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name, unique across all groups
    pub name: String,
    /// Price in whole BDT
    pub price_bdt: u64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_days: Option<u32>,
    /// Child add-ons; selectable only while this item is selected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<AddOn>,
    /// Whether the user may order more than one of this item
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_quantity: bool,
}

impl CatalogItem {
    pub fn new(name: &str, price_bdt: u64, notes: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            price_bdt,
            notes: notes.to_string(),
            icon: icon.to_string(),
            time_hours: None,
            time_days: None,
            add_ons: Vec::new(),
            allow_quantity: false,
        }
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.time_hours = Some(hours);
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.time_days = Some(days);
        self
    }

    pub fn with_quantity(mut self) -> Self {
        self.allow_quantity = true;
        self
    }

    pub fn add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    /// Time estimate, if exactly one denomination is set.
    pub fn time(&self) -> Option<TimeEstimate> {
        TimeEstimate::from_fields(self.time_hours, self.time_days)
    }
}

/// The three catalog groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CatalogGroup {
    #[strum(serialize = "pages")]
    Pages,
    #[strum(serialize = "custom_code")]
    CustomCode,
    #[strum(serialize = "extras")]
    Extras,
}

impl CatalogGroup {
    /// Title shown in the group tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Pages => "Pages",
            Self::CustomCode => "Codes",
            Self::Extras => "Extras",
        }
    }
}

/// Complete service catalog: three named groups of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub pages: Vec<CatalogItem>,
    pub custom_code: Vec<CatalogItem>,
    pub extras: Vec<CatalogItem>,
}

impl Catalog {
    /// Items of the given group.
    pub fn group(&self, group: CatalogGroup) -> &[CatalogItem] {
        match group {
            CatalogGroup::Pages => &self.pages,
            CatalogGroup::CustomCode => &self.custom_code,
            CatalogGroup::Extras => &self.extras,
        }
    }

    /// Iterate over every top-level item across all groups.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.pages
            .iter()
            .chain(self.custom_code.iter())
            .chain(self.extras.iter())
    }

    /// Find a top-level item by name, searching all groups.
    pub fn find_item(&self, name: &str) -> Option<&CatalogItem> {
        self.items().find(|item| item.name == name)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Validate the catalog structure.
    ///
    /// Checks that top-level names are unique across groups, add-on names
    /// are unique within their parent, no entry carries both an hour and a
    /// day estimate, and no composite `parent-name` selection key collides
    /// with a top-level name.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for item in self.items() {
            if !names.insert(item.name.as_str()) {
                return Err(QuotientError::catalog(format!(
                    "duplicate item name: {}",
                    item.name
                )));
            }
            if item.time_hours.is_some() && item.time_days.is_some() {
                return Err(QuotientError::catalog(format!(
                    "{}: time_hours and time_days are mutually exclusive",
                    item.name
                )));
            }
            let mut add_on_names = HashSet::new();
            for add_on in &item.add_ons {
                if !add_on_names.insert(add_on.name.as_str()) {
                    return Err(QuotientError::catalog(format!(
                        "{}: duplicate add-on name: {}",
                        item.name, add_on.name
                    )));
                }
                if add_on.time_hours.is_some() && add_on.time_days.is_some() {
                    return Err(QuotientError::catalog(format!(
                        "{}: time_hours and time_days are mutually exclusive",
                        add_on.name
                    )));
                }
            }
        }
        // Composite keys must not shadow top-level keys
        for item in self.items() {
            for add_on in &item.add_ons {
                let composite = format!("{}-{}", item.name, add_on.name);
                if names.contains(composite.as_str()) {
                    return Err(QuotientError::catalog(format!(
                        "selection key collision: {}",
                        composite
                    )));
                }
            }
        }
        Ok(())
    }

    /// The built-in service catalog.
    pub fn builtin() -> Self {
        Self {
            pages: vec![
                CatalogItem::new(
                    "Static Page",
                    3900,
                    "Figma design + Framer build",
                    "DesktopTower",
                )
                .hours(4)
                .with_quantity(),
                CatalogItem::new(
                    "Dynamic Page (CMS)",
                    5900,
                    "Includes content management setup",
                    "Database",
                )
                .hours(6)
                .with_quantity()
                .add_on(
                    AddOn::new(
                        "Notion Database Sync",
                        2000,
                        "Optional add-on for CMS pages",
                        "ArrowsClockwise",
                    )
                    .hours(2),
                ),
            ],
            custom_code: vec![CatalogItem::new(
                "React / Custom Code Component",
                4500,
                "Reusable component, dynamic if needed",
                "Code",
            )
            .hours(5)
            .add_on(
                AddOn::new(
                    "3D Scene / Three.js Integration",
                    10000,
                    "Single interactive 3D scene",
                    "Cube",
                )
                .hours(10),
            )
            .add_on(
                AddOn::new(
                    "Simple Animation / Framer Motion",
                    2500,
                    "Small component-level animations",
                    "Sparkle",
                )
                .hours(2),
            )
            .add_on(
                AddOn::new(
                    "Complex Animation / GSAP",
                    5000,
                    "Complex multi-step animation sequences",
                    "ShootingStar",
                )
                .hours(5),
            )],
            extras: vec![
                CatalogItem::new(
                    "UX Consultation",
                    3000,
                    "1-hour advice, review, improvement ideas",
                    "ChatCircleDots",
                )
                .hours(1),
                CatalogItem::new(
                    "UX Research Report",
                    20000,
                    "Research 5-10 real users: Profiles, Interviews, Behavior & Mental Model analysis",
                    "UsersThree",
                )
                .days(7),
                CatalogItem::new(
                    "UX Test Report",
                    25000,
                    "Testing 5-10 users, insights, recommendations",
                    "Flask",
                )
                .days(10),
                CatalogItem::new(
                    "Notion Design System Docs",
                    15000,
                    "Typography, colors, components, guidelines",
                    "BookOpen",
                )
                .hours(15),
                CatalogItem::new(
                    "Post-launch Support",
                    10000,
                    "1 month minor updates, bug fixes",
                    "Wrench",
                )
                .hours(10),
                CatalogItem::new(
                    "SEO Basic Optimization",
                    0,
                    "Meta tags, basic performance tweaks",
                    "ChartLineUp",
                )
                .hours(2),
            ],
        }
    }
}

/// Format an amount with thousands separators, e.g. `25000` -> `25,000`.
pub fn format_bdt(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a price for display; zero-priced items read "Free".
pub fn format_price(amount: u64) -> String {
    if amount == 0 {
        "Free".to_string()
    } else {
        format!("BDT {}", format_bdt(amount))
    }
}
