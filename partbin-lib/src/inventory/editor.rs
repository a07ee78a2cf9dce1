use tracing::debug;

use crate::inventory::{
    record::{Field, PartFields, RecordId, SparePart},
    store::RecordStore,
};

/// What the part form is currently being used for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// No form is open
    #[default]
    Idle,
    /// A new record is being composed
    Composing,
    /// An existing record is being edited
    Editing(RecordId),
}

/// The result of [`Editor::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was open, so nothing was saved
    Nothing,
    Added(RecordId),
    Updated(RecordId),
    /// The record being edited was removed while the form was open
    Missing(RecordId),
}

/// Draft state for the add/edit form.
///
/// Field changes only ever touch the draft. The store is written exclusively by
/// [`Editor::save`].
#[derive(Debug, Default, Clone)]
pub struct Editor {
    mode: EditorMode,
    draft: PartFields,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Idle
    }

    pub fn draft(&self) -> &PartFields {
        &self.draft
    }

    /// Open an empty form for a new record.
    pub fn begin_add(&mut self) {
        self.mode = EditorMode::Composing;
        self.draft = PartFields::default();
    }

    /// Open the form pre-filled with `record`'s current values.
    pub fn begin_edit(&mut self, record: &SparePart) {
        self.mode = EditorMode::Editing(record.id());
        self.draft = record.fields().clone();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Write the draft into `store` according to the current mode, then close and reset.
    pub fn save(&mut self, store: &mut RecordStore) -> SaveOutcome {
        let draft = std::mem::take(&mut self.draft);
        let mode = std::mem::take(&mut self.mode);

        let outcome = match mode {
            EditorMode::Idle => SaveOutcome::Nothing,
            EditorMode::Composing => SaveOutcome::Added(store.add(draft)),
            EditorMode::Editing(id) => {
                if store.update(id, draft) {
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Missing(id)
                }
            }
        };

        debug!("Saved part form: {outcome:?}");

        outcome
    }

    /// Close the form without saving.
    pub fn dismiss(&mut self) {
        self.mode = EditorMode::Idle;
        self.draft = PartFields::default();
    }
}
