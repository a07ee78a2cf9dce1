//! Spare parts inventory: an in-memory record store with selection, an add/edit form
//! workflow, free-text search, and bulk import from spreadsheets.

use thiserror::Error;

pub mod fs;
pub mod import;
pub mod inventory;

pub use inventory::{Field, Inventory, PartFields, RecordId, SparePart};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Import(#[from] import::ImportError),
}
