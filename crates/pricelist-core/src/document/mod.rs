pub mod layout;
pub mod pdftotext;
pub mod xlsx;

use crate::error::PriceListError;
use std::path::Path;

/// One table row as the backend sees it. Cells may be absent.
pub type Row = Vec<Option<String>>;

/// A table is a sequence of rows.
pub type Table = Vec<Row>;

/// An opened document. Pages are addressed by 0-based index.
///
/// Dropping the document releases whatever the backend acquired in
/// [`DocumentReader::open`].
pub trait Document {
    fn page_count(&self) -> usize;

    /// Structured rows found on the page.
    fn extract_tables(&self, page: usize) -> Result<Vec<Table>, PriceListError>;

    /// The page's plain text, lines separated by `\n`.
    fn extract_text(&self, page: usize) -> Result<Option<String>, PriceListError>;
}

/// Trait for document reading backends.
pub trait DocumentReader: Send + Sync {
    /// Open a document from fully buffered bytes.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn Document>, PriceListError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a backend from the file extension: spreadsheets go through
/// calamine, everything else is treated as PDF.
pub fn reader_for_path(path: &Path) -> Box<dyn DocumentReader> {
    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xlsm"))
        .unwrap_or(false);

    if is_xlsx {
        Box::new(xlsx::XlsxReader::new())
    } else {
        Box::new(pdftotext::PdftotextReader::new())
    }
}
