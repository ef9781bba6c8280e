//! Item Entity
//!
//! A single packing-list entry plus the draft the form builds it from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quantity preselected in the form
pub const DEFAULT_QUANTITY: u32 = 1;

/// Largest quantity the form offers
pub const MAX_QUANTITY: u32 = 20;

/// A packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, fixed at creation
    pub id: u32,
    /// What to pack
    pub description: String,
    /// How many, always >= 1
    pub quantity: u32,
    /// Whether it is already in the bag
    pub packed: bool,
}

impl Item {
    /// Create a new, unpacked item
    pub fn new(id: u32, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Same item with the packed flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    /// Row label, e.g. "2 Socks"
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

/// Reasons a draft cannot become an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please describe the item first")]
    EmptyDescription,
    #[error("Quantity must be between 1 and {max}, got {quantity}")]
    QuantityOutOfRange { quantity: u32, max: u32 },
}

/// Raw form input, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl ItemDraft {
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            description: description.into(),
            quantity,
        }
    }

    /// Check the draft without consuming an id
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if !(1..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(DraftError::QuantityOutOfRange {
                quantity: self.quantity,
                max: MAX_QUANTITY,
            });
        }
        Ok(())
    }

    /// Build an unpacked item with the given id.
    ///
    /// The description is stored trimmed.
    pub fn into_item(self, id: u32) -> Result<Item, DraftError> {
        self.validate()?;
        Ok(Item::new(id, self.description.trim(), self.quantity))
    }
}

/// Monotonic id source for new items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id. Ids are never reused, even after deletes or a clear.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Id the next call will return
    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Passport", 1);
        assert_eq!(item.id, 1);
        assert_eq!(item.description, "Passport");
        assert_eq!(item.quantity, 1);
        assert!(!item.packed);
    }

    #[test]
    fn test_toggled_only_flips_packed() {
        let item = Item::new(7, "Socks", 12);
        let toggled = item.toggled();
        assert!(toggled.packed);
        assert_eq!(toggled.id, item.id);
        assert_eq!(toggled.description, item.description);
        assert_eq!(toggled.quantity, item.quantity);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn test_label() {
        assert_eq!(Item::new(1, "Socks", 12).label(), "12 Socks");
    }

    #[test]
    fn test_draft_rejects_empty_description() {
        assert_eq!(ItemDraft::new("", 1).into_item(1), Err(DraftError::EmptyDescription));
        assert_eq!(ItemDraft::new("   ", 3).into_item(1), Err(DraftError::EmptyDescription));
    }

    #[test]
    fn test_draft_rejects_quantity_out_of_range() {
        assert_eq!(
            ItemDraft::new("Charger", 0).validate(),
            Err(DraftError::QuantityOutOfRange { quantity: 0, max: MAX_QUANTITY })
        );
        assert!(ItemDraft::new("Charger", MAX_QUANTITY + 1).validate().is_err());
        assert!(ItemDraft::new("Charger", MAX_QUANTITY).validate().is_ok());
    }

    #[test]
    fn test_draft_into_item_trims_description() {
        let item = ItemDraft::new("  Charger ", 2).into_item(5).unwrap();
        assert_eq!(item, Item::new(5, "Charger", 2));
    }

    #[test]
    fn test_default_draft() {
        let draft = ItemDraft::default();
        assert_eq!(draft.quantity, DEFAULT_QUANTITY);
        assert_eq!(draft.validate(), Err(DraftError::EmptyDescription));
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(DraftError::EmptyDescription.to_string(), "Please describe the item first");
        let err = DraftError::QuantityOutOfRange { quantity: 25, max: 20 };
        assert_eq!(err.to_string(), "Quantity must be between 1 and 20, got 25");
    }

    #[test]
    fn test_id_sequence_is_strictly_increasing() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.peek(), 1);
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(ids.peek(), 4);
    }

    #[test]
    fn test_item_serializes_with_plain_field_names() {
        let json = serde_json::to_value(Item::new(3, "Charger", 1)).unwrap();
        assert_eq!(json["description"], "Charger");
        assert_eq!(json["packed"], false);
    }
}
