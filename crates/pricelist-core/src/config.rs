use crate::error::PriceListError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the extraction pipeline. Every field has a default, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// The plain-text pass runs on a page while the document has
    /// accumulated fewer items than this after the page's table pass.
    pub fallback_threshold: usize,
    pub min_description_chars: usize,
    pub max_description_chars: usize,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            fallback_threshold: 5,
            min_description_chars: 3,
            max_description_chars: 200,
            min_price: Decimal::new(1, 2),
            max_price: Decimal::new(999_999, 2),
        }
    }
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<ExtractorConfig, PriceListError> {
    let content = std::fs::read_to_string(path).map_err(|e| PriceListError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: ExtractorConfig =
        serde_json::from_str(&content).map_err(|e| PriceListError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ExtractorConfig, PriceListError> {
    let config: ExtractorConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &ExtractorConfig) -> Result<(), PriceListError> {
    if config.min_description_chars > config.max_description_chars {
        return Err(PriceListError::ConfigInvalid(format!(
            "min_description_chars ({}) exceeds max_description_chars ({})",
            config.min_description_chars, config.max_description_chars
        )));
    }

    if config.min_price <= Decimal::ZERO {
        return Err(PriceListError::ConfigInvalid(format!(
            "min_price must be positive, got {}",
            config.min_price
        )));
    }

    if config.min_price > config.max_price {
        return Err(PriceListError::ConfigInvalid(format!(
            "min_price ({}) exceeds max_price ({})",
            config.min_price, config.max_price
        )));
    }

    Ok(())
}
