//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! only place a list snapshot gets replaced; components go through the
//! helpers below.

use leptos::prelude::*;
use packing_core::{Confirm, DraftError, IdSequence, Item, ItemDraft, PackingList, Stats};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current list snapshot
    pub items: PackingList,
    /// Source of ids for new items
    pub ids: IdSequence,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the snapshot unless the transition handed back the same one.
/// Returns whether subscribers were notified.
fn commit(store: &AppStore, next: PackingList) -> bool {
    let changed = !store.items().get_untracked().same_snapshot(&next);
    if changed {
        *store.items().write() = next;
        log_stats(store);
    }
    changed
}

fn log_stats(store: &AppStore) {
    let stats = Stats::from_items(&store.items().get_untracked());
    match serde_json::to_string(&stats) {
        Ok(json) => log::debug!("Stats {}", json),
        Err(e) => log::warn!("Failed to encode stats: {}", e),
    }
}

/// Append a fully formed item to the list
pub fn store_add_item(store: &AppStore, item: Item) -> bool {
    let id = item.id;
    let next = store.items().get_untracked().add(item);
    let changed = commit(store, next);
    if changed {
        log::info!("Added item #{}", id);
    } else {
        log::warn!("Item #{} already in the list", id);
    }
    changed
}

/// Validate a form draft, give it a fresh id and add it.
///
/// An invalid draft leaves both the list and the id sequence untouched.
pub fn store_submit_draft(store: &AppStore, draft: ItemDraft) -> Result<Item, DraftError> {
    draft.validate()?;
    let id = store.ids().write().next_id();
    let item = draft.into_item(id)?;
    store_add_item(store, item.clone());
    Ok(item)
}

/// Remove an item from the store by ID
pub fn store_delete_item(store: &AppStore, item_id: u32) -> bool {
    let next = store.items().get_untracked().delete(item_id);
    let changed = commit(store, next);
    log::info!("Delete item #{} (changed: {})", item_id, changed);
    changed
}

/// Flip the packed flag of an item by ID
pub fn store_toggle_item(store: &AppStore, item_id: u32) -> bool {
    let next = store.items().get_untracked().toggle_packed(item_id);
    let changed = commit(store, next);
    log::info!("Toggle item #{} (changed: {})", item_id, changed);
    changed
}

/// Clear the whole list once `confirm` agrees
pub fn store_clear_items(store: &AppStore, confirm: &impl Confirm) -> bool {
    let next = store.items().get_untracked().clear(confirm);
    let changed = commit(store, next);
    if changed {
        log::info!("Cleared the list");
    } else {
        log::debug!("Clear cancelled");
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(f: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(AppState::new())));
    }

    fn draft(name: &str) -> ItemDraft {
        ItemDraft::new(name, 1)
    }

    #[test]
    fn test_submit_draft_assigns_increasing_ids() {
        with_store(|store| {
            let a = store_submit_draft(&store, draft("Passport")).unwrap();
            let b = store_submit_draft(&store, draft("Socks")).unwrap();
            assert_eq!((a.id, b.id), (1, 2));
            assert_eq!(store.items().get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_invalid_draft_keeps_state() {
        with_store(|store| {
            let err = store_submit_draft(&store, draft("  ")).unwrap_err();
            assert_eq!(err, DraftError::EmptyDescription);
            assert!(store.items().get_untracked().is_empty());
            assert_eq!(store.ids().get_untracked().peek(), 1);
        });
    }

    #[test]
    fn test_unknown_id_does_not_replace_snapshot() {
        with_store(|store| {
            store_submit_draft(&store, draft("Charger")).unwrap();
            let before = store.items().get_untracked();
            assert!(!store_delete_item(&store, 99));
            assert!(!store_toggle_item(&store, 99));
            assert!(store.items().get_untracked().same_snapshot(&before));
        });
    }

    #[test]
    fn test_toggle_then_delete() {
        with_store(|store| {
            let item = store_submit_draft(&store, draft("Passport")).unwrap();
            assert!(store_toggle_item(&store, item.id));
            assert!(store.items().get_untracked().get(item.id).unwrap().packed);
            assert!(store_delete_item(&store, item.id));
            assert!(store.items().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_clear_respects_confirmation() {
        with_store(|store| {
            store_submit_draft(&store, draft("Passport")).unwrap();
            assert!(!store_clear_items(&store, &|_: &str| false));
            assert_eq!(store.items().get_untracked().len(), 1);
            assert!(store_clear_items(&store, &|_: &str| true));
            assert!(store.items().get_untracked().is_empty());
        });
    }
}
