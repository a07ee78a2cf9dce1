//! In-memory spare parts inventory.
//!
//! [`Inventory`] is the single owner of all view state: the [`RecordStore`] with its
//! selection, the [`Editor`] driving the add/edit form, and the active search term. A
//! front-end forwards user events into its methods and renders [`Inventory::visible`].

use tracing::{debug, info};

use crate::{Result, import};

pub mod editor;
pub mod record;
pub mod search;
pub mod store;

pub use editor::{Editor, EditorMode, SaveOutcome};
pub use record::{Field, PartFields, RecordId, SparePart};
pub use store::{RecordStore, Selection};

#[derive(Debug, Default, Clone)]
pub struct Inventory {
    store: RecordStore,
    editor: Editor,
    search: String,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    // Search

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Records matching the current search term, in store order.
    pub fn visible(&self) -> impl Iterator<Item = &SparePart> {
        search::filter(self.store.records(), &self.search)
    }

    // Edit workflow

    /// Open the form for a new record.
    pub fn add(&mut self) {
        self.editor.begin_add();
    }

    /// Open the form for the record with the given id. Returns `false` if it doesn't exist.
    pub fn edit(&mut self, id: RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.editor.begin_edit(record);
                true
            }
            None => false,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.editor.set_field(field, value);
    }

    pub fn save(&mut self) -> SaveOutcome {
        self.editor.save(&mut self.store)
    }

    pub fn dismiss(&mut self) {
        self.editor.dismiss();
    }

    // Import

    /// Parse `bytes` as a spreadsheet and append one record per data row.
    ///
    /// The whole workbook is read before the store is touched, so a failure leaves the
    /// inventory unchanged. Returns the ids of the new records in sheet order.
    pub fn import(&mut self, bytes: &[u8]) -> Result<Vec<RecordId>> {
        let rows = import::read_parts(bytes)?;
        debug!("Parsed {} rows from spreadsheet", rows.len());

        Ok(self.append_imported(rows))
    }

    /// Append rows that were already parsed elsewhere, e.g. on a blocking thread.
    pub fn append_imported(&mut self, rows: Vec<PartFields>) -> Vec<RecordId> {
        let ids = self.store.extend(rows);
        info!("Imported {} parts", ids.len());

        ids
    }
}

#[cfg(test)]
mod test {
    use super::{Field, Inventory, PartFields, SaveOutcome};

    #[test]
    fn test_scenario_add_update_select_remove() {
        let mut inventory = Inventory::new();
        let first = inventory.store_mut().add(
            PartFields::default()
                .with(Field::Equipment, "Pump")
                .with(Field::Qty, "2"),
        );

        inventory.add();
        inventory.set_field(Field::Equipment, "Valve");
        inventory.set_field(Field::Qty, "5");
        let SaveOutcome::Added(second) = inventory.save() else {
            panic!("expected a new record");
        };

        assert_eq!(inventory.store().len(), 2);
        assert_ne!(first, second);

        assert!(inventory.edit(first));
        inventory.set_field(Field::Qty, "3");
        assert_eq!(inventory.save(), SaveOutcome::Updated(first));

        let pump = inventory.store().get(first).unwrap().fields();
        assert_eq!(pump.qty, "3");
        assert_eq!(pump.equipment, "Pump");

        let store = inventory.store_mut();
        store.toggle_select(first);
        store.toggle_select(second);
        store.remove_many(&[first]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records().first().unwrap().id(), second);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut inventory = Inventory::new();
        let id = inventory.store_mut().add(PartFields::default());
        inventory.store_mut().remove(id);

        assert!(!inventory.edit(id));
        assert!(!inventory.editor().is_open());
    }

    #[test]
    fn test_visible_follows_search() {
        let mut inventory = Inventory::new();
        inventory
            .store_mut()
            .add(PartFields::default().with(Field::Equipment, "Pump"));
        inventory
            .store_mut()
            .add(PartFields::default().with(Field::Equipment, "Valve"));

        inventory.set_search("valve");
        assert_eq!(inventory.visible().count(), 1);

        inventory.set_search("");
        assert_eq!(inventory.visible().count(), 2);
        assert_eq!(inventory.store().len(), 2);
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let mut inventory = Inventory::new();
        inventory.store_mut().add(PartFields::default());

        assert!(inventory.import(b"definitely not a workbook").is_err());
        assert_eq!(inventory.store().len(), 1);
    }
}
