//! Bulk creation of spare parts from spreadsheet files.
//!
//! Reading happens in two steps: [`sheet::read_rows`] turns the first worksheet into
//! [`RawRow`]s keyed by header text, then [`PartFields::from_row`] maps each row onto the
//! eight known columns. Anything the mapping doesn't know about is ignored.

use std::{collections::HashMap, io, path::PathBuf};

use derive_more::{Deref, From};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::inventory::{Field, PartFields};

pub mod sheet;
pub mod source;
#[cfg(test)]
mod test_support;

pub use source::{FileContents, read_file};

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Not a readable spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("The workbook doesn't contain any sheets")]
    NoSheets,
}

/// A single cell as handed over by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// The cell rendered as record text. Whole numbers lose their fractional part.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }
}

/// One data row of a sheet, keyed by the text of its column header.
#[derive(Debug, Default, Clone, PartialEq, Deref, From)]
pub struct RawRow(HashMap<String, CellValue>);

impl RawRow {
    /// Text of the cell under `header`, or an empty string if the row has no such column.
    pub fn text(&self, header: &str) -> String {
        self.0.get(header).map(CellValue::to_text).unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, CellValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl PartFields {
    /// Map a spreadsheet row onto part fields. Every column missing from the row becomes an
    /// empty string.
    pub fn from_row(row: &RawRow) -> Self {
        let mut fields = PartFields::default();
        for field in Field::iter() {
            fields.set(field, row.text(field.header()));
        }
        fields
    }
}

/// Parse a workbook and map every data row of its first sheet onto [`PartFields`].
pub fn read_parts(bytes: &[u8]) -> Result<Vec<PartFields>> {
    Ok(sheet::read_rows(bytes)?
        .iter()
        .map(PartFields::from_row)
        .collect())
}

#[cfg(test)]
mod test {
    use super::{CellValue, RawRow, read_parts, test_support::xlsx};
    use crate::inventory::{Field, Inventory, PartFields};

    #[test]
    fn test_from_row_maps_known_headers() {
        let row: RawRow = [
            ("Equipment", CellValue::Text("Boiler".into())),
            ("Item Description", CellValue::Text("Gasket".into())),
            ("OEM Part Number", CellValue::Text("G-100".into())),
            ("OEM", CellValue::Text("Garlock".into())),
            ("QTY", CellValue::Number(12.0)),
            ("IGT Part Number", CellValue::Text("IGT-7".into())),
            ("Location", CellValue::Text("Store 1".into())),
            ("Sub Location", CellValue::Text("Rack A".into())),
        ]
        .into_iter()
        .collect();

        let fields = PartFields::from_row(&row);

        assert_eq!(fields.equipment, "Boiler");
        assert_eq!(fields.item_description, "Gasket");
        assert_eq!(fields.oem_part_number, "G-100");
        assert_eq!(fields.oem, "Garlock");
        assert_eq!(fields.qty, "12");
        assert_eq!(fields.igt_part_number, "IGT-7");
        assert_eq!(fields.location, "Store 1");
        assert_eq!(fields.sub_location, "Rack A");
    }

    #[test]
    fn test_from_row_missing_and_extra_columns() {
        let row: RawRow = [
            ("Equipment", CellValue::Text("Fan".into())),
            ("Notes", CellValue::Text("ignored".into())),
            ("Location", CellValue::Empty),
        ]
        .into_iter()
        .collect();

        let fields = PartFields::from_row(&row);

        assert_eq!(fields.equipment, "Fan");
        assert_eq!(fields.location, "");
        assert_eq!(fields.qty, "");
        assert_eq!(fields.sub_location, "");
    }

    #[test]
    fn test_headers_are_matched_exactly() {
        let row: RawRow = [("qty", CellValue::Number(3.0))].into_iter().collect();

        assert_eq!(PartFields::from_row(&row).qty, "");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(CellValue::Number(5.0).to_text(), "5");
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
        assert_eq!(CellValue::Number(0.0).to_text(), "0");
    }

    #[test]
    fn test_two_row_sheet_with_two_columns() {
        let bytes = xlsx(&[&["Equipment", "QTY"], &["Pump", "2"], &["Valve", "7"]]);

        let parts = read_parts(&bytes).unwrap();

        assert_eq!(parts.len(), 2);
        let pump = parts.first().unwrap();
        assert_eq!(pump.equipment, "Pump");
        assert_eq!(pump.qty, "2");
        for (field, value) in pump.iter() {
            if field != Field::Equipment && field != Field::Qty {
                assert_eq!(value, "", "{field:?} should be empty");
            }
        }
        assert_eq!(parts.last().unwrap().equipment, "Valve");
    }

    #[test]
    fn test_import_appends_after_existing_records() {
        let mut inventory = Inventory::new();
        let existing = inventory
            .store_mut()
            .add(PartFields::default().with(Field::Equipment, "Existing"));
        inventory.store_mut().toggle_select(existing);

        let bytes = xlsx(&[
            &["Equipment", "OEM", "Sub Location"],
            &["Compressor", "Atlas Copco", "A1"],
            &["Turbine", "GE", "A2"],
            &["Heat Exchanger", "Alfa Laval", "A3"],
        ]);

        let ids = inventory.import(&bytes).unwrap();

        let store = inventory.store();
        assert_eq!(ids.len(), 3);
        assert_eq!(store.len(), 4);
        assert!(!ids.contains(&existing));
        assert!(store.is_selected(existing));

        let equipment: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.fields().equipment.as_str())
            .collect();
        assert_eq!(
            equipment,
            vec!["Existing", "Compressor", "Turbine", "Heat Exchanger"]
        );
        assert_eq!(store.records().last().unwrap().fields().sub_location, "A3");
    }
}
