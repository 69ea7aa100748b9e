use pricelist_core::config::{load_config, ExtractorConfig};
use pricelist_core::error::PriceListError;
use std::path::{Path, PathBuf};

pub fn show(config_file: Option<PathBuf>) -> Result<(), PriceListError> {
    let config = match config_file {
        Some(path) => load_config(&path)?,
        None => ExtractorConfig::default(),
    };
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn validate(path: &Path) -> Result<(), PriceListError> {
    let config = load_config(path)?;
    println!(
        "Valid config: fallback below {} item(s), descriptions {}-{} chars, prices {}-{}",
        config.fallback_threshold,
        config.min_description_chars,
        config.max_description_chars,
        config.min_price,
        config.max_price
    );
    Ok(())
}
