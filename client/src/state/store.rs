//! Ordered in-memory record store owned by a single view.
//!
//! DESIGN
//! ======
//! Ids come from one monotonic counter seeded past the largest seed id, so an
//! id is never handed out twice even after deletes. Updates and removes of an
//! absent id are silent no-ops.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::record::{Record, RecordId};

/// Insertion-ordered records plus the next id to assign.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityStore<E: Record> {
    records: Vec<E>,
    next_id: RecordId,
}

impl<E: Record> Default for EntityStore<E> {
    fn default() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }
}

impl<E: Record> EntityStore<E> {
    /// Build a store from records that already carry ids.
    #[must_use]
    pub fn with_seed(records: Vec<E>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// Append a record under a freshly assigned id.
    pub fn add(&mut self, mut record: E) -> &E {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        log::debug!("{} {id} added", E::NOUN);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Replace every field of the record with `id`, keeping its id.
    /// Returns `None` and changes nothing when `id` is absent.
    pub fn update(&mut self, id: RecordId, mut patch: E) -> Option<&E> {
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        patch.set_id(id);
        *slot = patch;
        log::debug!("{} {id} updated", E::NOUN);
        Some(&*slot)
    }

    /// Remove the record with `id`; `None` when absent.
    pub fn remove(&mut self, id: RecordId) -> Option<E> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        log::debug!("{} {id} removed", E::NOUN);
        Some(self.records.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn list(&self) -> &[E] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
