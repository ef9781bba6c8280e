//! Derived Stats
//!
//! Aggregates computed from a list snapshot on demand. Nothing here is stored.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Counts and packed percentage for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_items: usize,
    pub packed_items: usize,
    /// 0..=100, rounded half up; 0 for an empty list
    pub percentage: u32,
}

impl Stats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let (total_items, packed_items) = items
            .into_iter()
            .fold((0usize, 0usize), |(total, packed), item| {
                (total + 1, packed + usize::from(item.packed))
            });
        Self {
            total_items,
            packed_items,
            percentage: percentage(packed_items, total_items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn all_packed(&self) -> bool {
        !self.is_empty() && self.packed_items == self.total_items
    }

    /// Footer line for this snapshot
    pub fn message(&self) -> String {
        if self.is_empty() {
            return "Start adding some items to your packing list 🚀".to_string();
        }
        if self.all_packed() {
            return "You got everything! Ready to go ✈️".to_string();
        }
        format!(
            "💼 You have {} items on your list, and you already packed {} ({}%)",
            self.total_items, self.packed_items, self.percentage
        )
    }
}

/// packed / total * 100, rounded half up
fn percentage(packed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((packed * 200 + total) / (total * 2)) as u32
}
