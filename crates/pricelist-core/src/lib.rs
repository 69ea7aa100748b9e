pub mod compare;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod model;
pub mod parsing;

use config::ExtractorConfig;
use document::DocumentReader;
use error::PriceListError;
use model::{ExtractionOutcome, ExtractionResult};
use tracing::{info, warn};

/// Largest upload accepted upstream.
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Main API entry point: extract the price list from a document.
///
/// Never fails. If the document cannot be opened or read, the outcome is
/// empty and carries a diagnostic; callers should then leave any stored
/// catalog untouched.
pub fn extract_price_list(
    bytes: &[u8],
    reader: &dyn DocumentReader,
    config: &ExtractorConfig,
) -> ExtractionOutcome {
    match try_extract(bytes, reader, config) {
        Ok(result) => result.into(),
        Err(e) => {
            warn!(backend = reader.backend_name(), "error processing document: {e}");
            ExtractionOutcome {
                diagnostic: Some(e.to_string()),
                ..Default::default()
            }
        }
    }
}

/// Like [`extract_price_list`] but surfaces document errors.
///
/// The document is opened for the duration of this call and dropped on
/// every exit path.
pub fn try_extract(
    bytes: &[u8],
    reader: &dyn DocumentReader,
    config: &ExtractorConfig,
) -> Result<ExtractionResult, PriceListError> {
    let doc = reader.open(bytes)?;
    info!(
        backend = reader.backend_name(),
        pages = doc.page_count(),
        "processing document"
    );

    let result = extract::extract_document(doc.as_ref(), config)?;

    info!(
        items = result.items.len(),
        rejected_by_validation = result.stats.rejected_by_validation,
        rejected_as_duplicate = result.stats.rejected_as_duplicate,
        fallback_pages = result.stats.fallback_pages,
        "total items extracted"
    );
    Ok(result)
}
