//! Session tests: drafts, ids, transitions and stats working together.

use crate::{IdSequence, ItemDraft, PackingList, Stats};

#[test]
fn test_passport_session() {
    let mut ids = IdSequence::new();
    let list = PackingList::new();
    assert!(list.is_empty());

    let passport = ItemDraft::new("Passport", 1).into_item(ids.next_id()).unwrap();
    let id = passport.id;
    let list = list.add(passport);
    assert_eq!(list.len(), 1);
    let stats = Stats::from_items(&list);
    assert_eq!(stats.total_items, 1);
    assert_eq!(stats.percentage, 0);

    let list = list.toggle_packed(id);
    assert_eq!(Stats::from_items(&list).percentage, 100);

    let list = list.delete(id);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_ids_stay_unique_after_clear() {
    let mut ids = IdSequence::new();
    let mut list = PackingList::new();
    for name in ["Socks", "Charger"] {
        list = list.add(ItemDraft::new(name, 1).into_item(ids.next_id()).unwrap());
    }
    list = list.clear(&|_: &str| true);
    list = list.add(ItemDraft::new("Hat", 1).into_item(ids.next_id()).unwrap());

    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].id, 3);
}

#[test]
fn test_invalid_draft_does_not_consume_id() {
    let mut ids = IdSequence::new();
    let draft = ItemDraft::new("", 1);
    if draft.validate().is_ok() {
        ids.next_id();
    }
    assert_eq!(ids.peek(), 1);
}

#[test]
fn test_snapshots_are_independent() {
    let mut ids = IdSequence::new();
    let before = PackingList::new().add(ItemDraft::new("Towel", 2).into_item(ids.next_id()).unwrap());
    let after = before.toggle_packed(1);

    assert!(!before.get(1).unwrap().packed);
    assert!(after.get(1).unwrap().packed);
    assert_ne!(Stats::from_items(&before), Stats::from_items(&after));
}
