use std::collections::HashSet;

use derive_more::Deref;
use tracing::debug;

use crate::inventory::record::{PartFields, RecordId, SparePart};

/// Set of [`RecordId`]s checked for a bulk action.
///
/// Only the [`RecordStore`] can change it, so removals always clean it up alongside the
/// records.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref)]
pub struct Selection(HashSet<RecordId>);

/// Insertion ordered collection of [`SparePart`]s plus the current [`Selection`].
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<SparePart>,
    selection: Selection,
    /// The id the next inserted record receives. Never decremented or reset.
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Queries

    pub fn records(&self) -> &[SparePart] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&SparePart> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether every record currently in the store is selected. True for an empty store.
    pub fn all_selected(&self) -> bool {
        self.records.iter().all(|r| self.selection.contains(&r.id()))
    }

    // Operations

    /// Append a new record and return its freshly allocated id.
    pub fn add(&mut self, fields: PartFields) -> RecordId {
        let id = self.allocate_id();
        self.records.push(SparePart::new(id, fields));

        debug!("Added record {id}");

        id
    }

    /// Append every row in order, each under a fresh id.
    pub fn extend<I>(&mut self, rows: I) -> Vec<RecordId>
    where
        I: IntoIterator<Item = PartFields>,
    {
        let ids: Vec<RecordId> = rows.into_iter().map(|fields| self.add(fields)).collect();

        debug!("Appended {} records", ids.len());

        ids
    }

    /// Replace all fields of the record with the given id, keeping its id and position.
    ///
    /// Returns `false` without touching anything if no such record exists.
    pub fn update(&mut self, id: RecordId, fields: PartFields) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.replace_fields(fields);
                debug!("Updated record {id}");
                true
            }
            None => false,
        }
    }

    /// Remove a single record, dropping it from the selection as well.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.selection.0.remove(&id);

        let removed = self.records.len() != before;
        if removed {
            debug!("Removed record {id}");
        }

        removed
    }

    /// Remove every record whose id is in `ids` and clear the whole selection.
    pub fn remove_many<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let doomed: HashSet<RecordId> = ids.into_iter().copied().collect();

        let before = self.records.len();
        self.records.retain(|r| !doomed.contains(&r.id()));
        self.selection.0.clear();

        let removed = before - self.records.len();
        debug!("Removed {removed} records");

        removed
    }

    /// Remove everything currently selected.
    pub fn remove_selected(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selection.0);
        self.remove_many(&selected)
    }

    /// Drop every record and the selection. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.records.clear();
        self.selection.0.clear();

        debug!("Cleared all records");
    }

    /// Flip the selection state of `id`. The id is not checked against the store.
    pub fn toggle_select(&mut self, id: RecordId) {
        if !self.selection.0.remove(&id) {
            self.selection.0.insert(id);
        }
    }

    /// Clear the selection if everything is selected, otherwise select every record.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selection.0.clear();
        } else {
            self.selection.0 = self.records.iter().map(SparePart::id).collect();
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }
}
