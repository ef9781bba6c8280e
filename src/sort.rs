//! List Sorting
//!
//! Presentation order for the list. Sorting works on borrowed items and
//! never touches the snapshot's own order.

use packing_core::Item;
use serde::{Deserialize, Serialize};

/// How the list renderer orders rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order the items were added in
    #[default]
    Input,
    /// Alphabetical, ignoring case
    Description,
    /// Unpacked items first
    Packed,
}

/// Sort options for the select, as (value, label)
pub const SORT_OPTIONS: &[(SortBy, &str)] = &[
    (SortBy::Input, "Sort by input order"),
    (SortBy::Description, "Sort by description"),
    (SortBy::Packed, "Sort by packed status"),
];

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    /// Unknown values fall back to input order
    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortBy::Description,
            "packed" => SortBy::Packed,
            _ => SortBy::Input,
        }
    }
}

/// Items in display order. Sorts are stable, so ties keep input order.
pub fn sorted_items(items: &[Item], sort_by: SortBy) -> Vec<&Item> {
    let mut rows: Vec<&Item> = items.iter().collect();
    match sort_by {
        SortBy::Input => {}
        SortBy::Description => rows.sort_by_cached_key(|item| item.description.to_lowercase()),
        SortBy::Packed => rows.sort_by_key(|item| item.packed),
    }
    rows
}
