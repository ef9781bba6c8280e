//! Packing List Core
//!
//! Pure state layer for the packing list:
//! - item: the Item entity and form drafts
//! - list: immutable list snapshots and their transitions
//! - stats: aggregates derived from a snapshot
//! - confirm: pluggable yes/no capability used by destructive transitions
//!
//! This crate has NO UI dependencies.

mod confirm;
mod item;
mod list;
mod stats;

#[cfg(test)]
mod tests;

pub use confirm::{Confirm, CLEAR_PROMPT};
pub use item::{DraftError, IdSequence, Item, ItemDraft, DEFAULT_QUANTITY, MAX_QUANTITY};
pub use list::PackingList;
pub use stats::Stats;
