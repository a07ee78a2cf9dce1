use rust_xlsxwriter::Workbook;

/// Build an in-memory xlsx workbook with a single sheet of text cells. Empty strings are left
/// as blank cells.
pub(crate) fn xlsx(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let row = u32::try_from(r).unwrap();
            let col = u16::try_from(c).unwrap();
            sheet.write_string(row, col, *value).unwrap();
        }
    }

    workbook.save_to_buffer().unwrap()
}
