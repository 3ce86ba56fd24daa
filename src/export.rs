use std::{io::Cursor, path::Path};

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::{record::ReviewRecord, Error, Result, SHEET_NAME};

/// Longest string a single xlsx cell holds.
const MAX_CELL_CHARS: usize = 32_767;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// Writes a single-sheet workbook: a header row followed by `rows`, no index column.
pub fn write_sheet<'a, I, R>(headers: &[&str], rows: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = Cell<'a>>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(headers) {
        worksheet.write_string(0, col, *header)?;
    }
    for (row, cells) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) => worksheet.write_string(row, col, fit_cell(text, row, col))?,
                Cell::Number(number) => worksheet.write_number(row, col, number)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Cuts text that doesn't fit into a cell, the way spreadsheet writers usually do.
fn fit_cell(text: &str, row: u32, col: u16) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            tracing::warn!(row, col, "cell text exceeds {MAX_CELL_CHARS} characters, truncating");
            &text[..end]
        }
        None => text,
    }
}

/// Serializes the reviews into an xlsx workbook with the columns
/// `Title, Body, Date, Rating, Reviewer`.
pub fn reviews_to_table(records: &[ReviewRecord]) -> Result<Vec<u8>> {
    let rows = records.iter().map(|r| {
        [
            Cell::Text(&r.title),
            Cell::Text(&r.body),
            Cell::Text(&r.date),
            Cell::Number(f64::from(r.rating)),
            Cell::Text(&r.reviewer),
        ]
    });
    write_sheet(&ReviewRecord::COLUMNS, rows)
}

/// Writes the workbook bytes to `path`.
pub async fn save_table(path: impl AsRef<Path>, table: &[u8]) -> Result<()> {
    tokio::fs::write(path, table).await?;
    Ok(())
}

/// Reads the first worksheet of an xlsx workbook.
pub fn read_sheet(bytes: &[u8]) -> Result<Range<Data>> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::EmptyWorkbook)??;
    Ok(range)
}

/// Plain text of a cell, the way a spreadsheet would show it.
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
