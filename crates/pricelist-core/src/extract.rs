use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::ExtractorConfig;
use crate::document::{Document, Table};
use crate::error::PriceListError;
use crate::model::{ExtractionResult, ExtractionStats, LineItem};
use crate::parsing::{evaluate_line, LineOutcome};

/// Where a candidate line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Table,
    Text,
}

/// Items and counters accumulated across all pages of one document.
///
/// Duplicate detection is document-wide: the first occurrence of a
/// description wins, whichever page or pass it came from.
#[derive(Debug, Default)]
pub struct Accumulator {
    items: Vec<LineItem>,
    seen: HashSet<String>,
    stats: ExtractionStats,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Run one raw line through the matcher and keep it if it is new.
    pub fn offer(&mut self, raw: &str, source: Source, config: &ExtractorConfig) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        self.stats.candidate_lines += 1;

        match evaluate_line(raw, config) {
            LineOutcome::NoMatch => {}
            LineOutcome::Conversion(e) => {
                self.stats.matched_lines += 1;
                self.stats.conversion_errors += 1;
                debug!(line = raw, "error converting price: {e}");
            }
            LineOutcome::Rejected(reason) => {
                self.stats.matched_lines += 1;
                self.stats.rejected_by_validation += 1;
                trace!(line = raw, ?reason, "line failed validation");
            }
            LineOutcome::Item(item) => {
                self.stats.matched_lines += 1;
                if self.seen.contains(&item.description) {
                    self.stats.rejected_as_duplicate += 1;
                    trace!(description = %item.description, "duplicate description");
                    return;
                }
                debug!(?source, "item extracted: {item}");
                self.seen.insert(item.description.clone());
                self.items.push(item);
            }
        }
    }

    pub fn finish(self) -> ExtractionResult {
        ExtractionResult {
            items: self.items,
            stats: self.stats,
        }
    }
}

/// Table pass: the first cell of each row carries the whole catalog line.
pub fn scan_tables(tables: &[Table], acc: &mut Accumulator, config: &ExtractorConfig) {
    for table in tables {
        for row in table {
            if let Some(Some(cell)) = row.first() {
                acc.offer(cell, Source::Table, config);
            }
        }
    }
}

/// Plain-text pass over newline-separated lines.
pub fn scan_text(text: &str, acc: &mut Accumulator, config: &ExtractorConfig) {
    for line in text.split('\n') {
        acc.offer(line, Source::Text, config);
    }
}

/// Process one page: tables first, then plain text while the document as
/// a whole has fewer than `fallback_threshold` items.
pub fn scan_page(
    doc: &dyn Document,
    page: usize,
    acc: &mut Accumulator,
    config: &ExtractorConfig,
) -> Result<(), PriceListError> {
    let tables = doc.extract_tables(page)?;
    acc.stats.pages += 1;
    acc.stats.tables += tables.len();
    debug!(page = page + 1, tables = tables.len(), "found tables on page");

    scan_tables(&tables, acc, config);

    // Cumulative on purpose: the threshold is checked against every item
    // found so far in the document, not just this page's.
    if acc.item_count() < config.fallback_threshold {
        acc.stats.fallback_pages += 1;
        debug!(
            page = page + 1,
            items = acc.item_count(),
            "few items from tables, reading plain text"
        );
        if let Some(text) = doc.extract_text(page)? {
            scan_text(&text, acc, config);
        }
    }

    Ok(())
}

/// Walk every page of an opened document. Any document error aborts.
pub fn extract_document(
    doc: &dyn Document,
    config: &ExtractorConfig,
) -> Result<ExtractionResult, PriceListError> {
    let mut acc = Accumulator::new();
    for page in 0..doc.page_count() {
        scan_page(doc, page, &mut acc, config)?;
    }
    Ok(acc.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn offer_all(lines: &[&str]) -> ExtractionResult {
        let config = ExtractorConfig::default();
        let mut acc = Accumulator::new();
        for line in lines {
            acc.offer(line, Source::Table, &config);
        }
        acc.finish()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let result = offer_all(&[
            "1 DIPIRONA 500MG CX 4,5000 1,0000",
            "2 DIPIRONA 500MG CX 3,9000 1,0000",
        ]);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].price, dec!(4.5));
        assert_eq!(result.stats.rejected_as_duplicate, 1);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let result = offer_all(&[
            "1 DIPIRONA 500MG CX 4,5000 1,0000",
            "2 Dipirona 500MG CX 4,5000 1,0000",
        ]);
        assert_eq!(result.items.len(), 2);
    }

    #[test]
    fn test_counters() {
        let result = offer_all(&[
            "Codigo Descricao Unid Preco Qtde",
            "1 AB CX 4,5000 1,0000",
            "2 SERINGA 10ML UN 10000,0000 1,0000",
            "3 SORO FR 99999999999999999999999999999999,0000 1,0000",
            "4 GAZE PCT 2,5000 1,0000",
            "   ",
        ]);
        assert_eq!(result.items.len(), 1);
        let stats = result.stats;
        assert_eq!(stats.candidate_lines, 5);
        assert_eq!(stats.matched_lines, 4);
        assert_eq!(stats.rejected_by_validation, 2);
        assert_eq!(stats.conversion_errors, 1);
    }

    #[test]
    fn test_scan_tables_uses_first_cell_only() {
        let config = ExtractorConfig::default();
        let tables = vec![vec![
            vec![None, Some("1 GAZE PCT 2,5000 1,0000".to_string())],
            vec![Some("2 SORO FR 3,0000 1,0000".to_string()), Some("ignored".to_string())],
            vec![],
        ]];
        let mut acc = Accumulator::new();
        scan_tables(&tables, &mut acc, &config);
        let result = acc.finish();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].description, "SORO");
    }

    #[test]
    fn test_scan_text_handles_crlf_and_blank_lines() {
        let config = ExtractorConfig::default();
        let mut acc = Accumulator::new();
        scan_text(
            "TABELA\r\n\r\n1 GAZE PCT 2,5000 1,0000\r\n",
            &mut acc,
            &config,
        );
        let result = acc.finish();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.stats.candidate_lines, 2);
    }
}
