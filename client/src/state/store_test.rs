use super::*;
use crate::state::patients::{Gender, Patient, seed};

fn patient(name: &str) -> Patient {
    Patient { id: 0, name: name.to_owned(), age: 40, gender: Gender::Female, condition: "Flu".to_owned() }
}

// =============================================================
// add
// =============================================================

#[test]
fn add_appends_with_fresh_id() {
    let mut store = EntityStore::with_seed(seed());
    let added = store.add(patient("Alice")).clone();

    assert_eq!(added.id, 3);
    assert_eq!(store.len(), 3);
    assert_eq!(store.list().last(), Some(&added));
    assert_eq!(Patient { id: 0, ..added }, patient("Alice"));
}

#[test]
fn empty_store_starts_ids_at_one() {
    let mut store = EntityStore::<Patient>::default();
    assert!(store.is_empty());
    assert_eq!(store.add(patient("Alice")).id, 1);
    assert_eq!(store.add(patient("Bob")).id, 2);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut store = EntityStore::with_seed(seed());
    let id = store.add(patient("Alice")).id;
    assert!(store.remove(id).is_some());

    let next = store.add(patient("Bob")).id;
    assert_ne!(next, id);
    assert!(next > id);
}

#[test]
fn seed_with_gaps_continues_past_largest_id() {
    let mut records = seed();
    records[1].id = 10;
    let mut store = EntityStore::with_seed(records);
    assert_eq!(store.add(patient("Alice")).id, 11);
}

// =============================================================
// update / remove
// =============================================================

#[test]
fn update_replaces_fields_and_keeps_id() {
    let mut store = EntityStore::with_seed(seed());
    let updated = store.update(1, patient("Johnny")).cloned();

    assert_eq!(updated.as_ref().map(|p| p.id), Some(1));
    assert_eq!(store.get(1).map(|p| p.name.as_str()), Some("Johnny"));
    assert_eq!(store.len(), 2);
}

#[test]
fn update_absent_id_changes_nothing() {
    let mut store = EntityStore::with_seed(seed());
    let before = store.clone();
    assert!(store.update(99, patient("Ghost")).is_none());
    assert_eq!(store, before);
}

#[test]
fn remove_present_and_absent() {
    let mut store = EntityStore::with_seed(seed());
    assert_eq!(store.remove(1).map(|p| p.name), Some("John Doe".to_owned()));
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_none());

    assert!(store.remove(1).is_none());
    assert_eq!(store.len(), 1);
}
