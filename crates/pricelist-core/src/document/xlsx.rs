use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tracing::debug;

use crate::document::{Document, DocumentReader, Table};
use crate::error::PriceListError;

/// Spreadsheet backend for suppliers that send their list as xlsx.
///
/// Each worksheet is a page holding one table. A sheet row becomes one
/// cell: its non-empty cells joined by a space, numbers rendered the way
/// the printed list shows them (see [`render_row`]). There is no plain
/// text, so the fallback pass finds nothing here.
pub struct XlsxReader;

impl XlsxReader {
    pub fn new() -> Self {
        XlsxReader
    }
}

impl Default for XlsxReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for XlsxReader {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn Document>, PriceListError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| PriceListError::DocumentOpen(format!("failed to open xlsx: {e}")))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                PriceListError::DocumentOpen(format!("failed to read sheet '{name}': {e}"))
            })?;
            let rows: Vec<String> = range.rows().filter_map(render_row).collect();
            debug!(sheet = %name, rows = rows.len(), "read worksheet");
            sheets.push(rows);
        }

        Ok(Box::new(XlsxDocument { sheets }))
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

struct XlsxDocument {
    sheets: Vec<Vec<String>>,
}

impl Document for XlsxDocument {
    fn page_count(&self) -> usize {
        self.sheets.len()
    }

    fn extract_tables(&self, page: usize) -> Result<Vec<Table>, PriceListError> {
        let rows = self
            .sheets
            .get(page)
            .ok_or_else(|| PriceListError::DocumentOpen(format!("sheet {} out of range", page + 1)))?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![rows.iter().map(|r| vec![Some(r.clone())]).collect()])
    }

    fn extract_text(&self, _page: usize) -> Result<Option<String>, PriceListError> {
        Ok(None)
    }
}

/// Render a sheet row as one catalog line, or `None` if it is blank.
///
/// The leading cell is the item code, so a whole number there prints
/// without decimals. Every later number prints with four fractional
/// digits, matching the `17,9900` shape of the printed list.
fn render_row(row: &[Data]) -> Option<String> {
    let mut parts = Vec::new();
    for cell in row {
        let leading = parts.is_empty();
        if let Some(text) = render_cell(cell, leading) {
            parts.push(text);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn render_cell(cell: &Data, leading: bool) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(render_number(*f, leading)),
        Data::Int(i) => Some(render_number(*i as f64, leading)),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

fn render_number(value: f64, leading: bool) -> String {
    if leading && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}
