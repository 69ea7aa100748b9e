use crate::document::layout::tables_from_layout;
use crate::document::{Document, DocumentReader, Table};
use crate::error::PriceListError;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::debug;

/// PDF backend using pdftotext (from poppler-utils).
///
/// Tables come from `pdftotext -layout`, which preserves column alignment.
/// Plain text comes from a per-page run without `-layout`, so words follow
/// reading order the way a text extractor would return them.
pub struct PdftotextReader;

impl PdftotextReader {
    pub fn new() -> Self {
        PdftotextReader
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdftotextReader {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn Document>, PriceListError> {
        // The temp file lives as long as the document and is removed on drop.
        let mut file =
            NamedTempFile::new().map_err(|e| PriceListError::DocumentOpen(e.to_string()))?;
        file.write_all(bytes)
            .map_err(|e| PriceListError::DocumentOpen(e.to_string()))?;
        file.flush()
            .map_err(|e| PriceListError::DocumentOpen(e.to_string()))?;

        let layout = run_pdftotext(file.path(), &["-layout"])?;
        let pages = split_pages(&layout);
        debug!(pages = pages.len(), "pdftotext opened document");

        Ok(Box::new(PdftotextDocument { file, pages }))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

struct PdftotextDocument {
    file: NamedTempFile,
    /// Layout text, one entry per page.
    pages: Vec<Vec<String>>,
}

impl PdftotextDocument {
    fn layout_page(&self, page: usize) -> Result<&[String], PriceListError> {
        self.pages
            .get(page)
            .map(Vec::as_slice)
            .ok_or_else(|| PriceListError::DocumentOpen(format!("page {} out of range", page + 1)))
    }
}

impl Document for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_tables(&self, page: usize) -> Result<Vec<Table>, PriceListError> {
        Ok(tables_from_layout(self.layout_page(page)?))
    }

    fn extract_text(&self, page: usize) -> Result<Option<String>, PriceListError> {
        self.layout_page(page)?;
        let number = (page + 1).to_string();
        let text = run_pdftotext(self.file.path(), &["-f", &number, "-l", &number])?;
        let text = text.replace('\x0c', "");
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}

fn run_pdftotext(pdf_path: &Path, args: &[&str]) -> Result<String, PriceListError> {
    let output = Command::new("pdftotext")
        .args(args)
        .arg(pdf_path)
        .arg("-") // output to stdout
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PriceListError::PdftotextNotFound
            } else {
                PriceListError::DocumentOpen(format!("pdftotext failed: {}", e))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(PriceListError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split pdftotext output into pages. Every page is terminated by a form
/// feed (`\x0c`), so the text after the last one is not a page.
fn split_pages(text: &str) -> Vec<Vec<String>> {
    let body = text.strip_suffix('\x0c').unwrap_or(text);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\x0c')
        .map(|page| page.lines().map(|l| l.to_string()).collect())
        .collect()
}
