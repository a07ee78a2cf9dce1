use std::{collections::HashMap, io::Cursor};

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use crate::import::{CellValue, ImportError, RawRow, Result};

/// Read the first worksheet of a workbook into rows keyed by the header row.
///
/// The format (xlsx, xlsb, xls, ods) is detected from the bytes. Rows with no content at all
/// are skipped, as are cells under an empty header. If a header appears more than once the
/// leftmost column wins.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        debug!("Sheet '{sheet_name}' is empty");
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_value(cell).to_text())
        .collect();

    let records: Vec<RawRow> = rows
        .filter_map(|cells| {
            let mut row = HashMap::new();
            for (header, cell) in headers.iter().zip(cells) {
                if header.is_empty() {
                    continue;
                }
                row.entry(header.clone()).or_insert_with(|| cell_value(cell));
            }

            // Skip completely blank rows
            if row.values().all(CellValue::is_empty) {
                None
            } else {
                Some(RawRow::from(row))
            }
        })
        .collect();

    debug!("Read {} rows from sheet '{sheet_name}'", records.len());

    Ok(records)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Text(i.to_string()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // Dates come through as their serial number, the same as a plain numeric cell
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}
