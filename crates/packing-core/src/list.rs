//! Packing List Snapshots
//!
//! `PackingList` is an immutable value. Every transition returns a new
//! snapshot and leaves the receiver untouched. A transition that changes
//! nothing returns a snapshot sharing the receiver's buffer, so
//! `same_snapshot` tells a caller whether a re-render is needed without
//! comparing items.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::confirm::{Confirm, CLEAR_PROMPT};
use crate::item::Item;

/// Ordered, unique-id collection of items
#[derive(Debug, Clone, Default)]
pub struct PackingList {
    items: Arc<Vec<Item>>,
}

impl PartialEq for PackingList {
    fn eq(&self, other: &Self) -> bool {
        self.same_snapshot(other) || self.items == other.items
    }
}

impl Eq for PackingList {}

impl Serialize for PackingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(items: Vec<Item>) -> Self {
        Self { items: Arc::new(items) }
    }

    /// True when both values share one buffer
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    // ========================
    // Transitions
    // ========================

    /// Append an item to the end.
    ///
    /// An item whose id is already taken is ignored so ids stay unique.
    pub fn add(&self, item: Item) -> Self {
        if self.contains(item.id) {
            return self.clone();
        }
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self::from_vec(items)
    }

    /// Drop the item with `id`; unknown ids leave the snapshot as is
    pub fn delete(&self, id: u32) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        Self::from_vec(self.items.iter().filter(|item| item.id != id).cloned().collect())
    }

    /// Flip `packed` on the item with `id`; unknown ids leave the snapshot as is
    pub fn toggle_packed(&self, id: u32) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        Self::from_vec(
            self.items
                .iter()
                .map(|item| if item.id == id { item.toggled() } else { item.clone() })
                .collect(),
        )
    }

    /// Empty the list once `confirm` agrees; otherwise keep this snapshot
    pub fn clear(&self, confirm: &impl Confirm) -> Self {
        if confirm.confirm(CLEAR_PROMPT) {
            Self::new()
        } else {
            self.clone()
        }
    }
}

impl<'a> IntoIterator for &'a PackingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for PackingList {
    /// Collect items, keeping the first occurrence of each id
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |list, item| list.add(item))
    }
}
