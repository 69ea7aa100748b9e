use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PriceListError {
    #[error("could not process file: {0}")]
    DocumentOpen(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("could not extract data from file. Check that the price list has the expected format")]
    NoItems,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure local to one candidate line. Never aborts a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("invalid number '{value}': {reason}")]
    Conversion { value: String, reason: String },
}
