use pricelist_core::config::{load_config, ExtractorConfig};
use pricelist_core::document::reader_for_path;
use pricelist_core::error::PriceListError;
use pricelist_core::model::LineItem;
use pricelist_core::MAX_INPUT_BYTES;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    show_stats: bool,
) -> Result<(), PriceListError> {
    let config = match config_file {
        Some(path) => load_config(&path)?,
        None => ExtractorConfig::default(),
    };

    let bytes = std::fs::read(&input_file)?;
    if bytes.len() > MAX_INPUT_BYTES {
        return Err(PriceListError::DocumentOpen(format!(
            "{} is larger than {} MB",
            input_file.display(),
            MAX_INPUT_BYTES / (1024 * 1024)
        )));
    }

    let reader = reader_for_path(&input_file);
    let outcome = pricelist_core::extract_price_list(&bytes, reader.as_ref(), &config);

    if show_stats {
        eprint!("{}", output::table::format_stats(&outcome.stats));
    }

    if outcome.items.is_empty() {
        if let Some(ref diagnostic) = outcome.diagnostic {
            eprintln!("  {diagnostic}");
        }
        return Err(PriceListError::NoItems);
    }

    match output_file {
        Some(path) => {
            replace_catalog(&path, &outcome.items)?;
            eprintln!(
                "{} item(s) imported, written to {}",
                outcome.items.len(),
                path.display()
            );
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&outcome.items)?,
                _ => output::table::format_items(&outcome.items),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}

/// Replace the catalog file wholesale. The new content is written next to
/// the target and renamed over it, so a failed write leaves the old
/// catalog in place.
fn replace_catalog(path: &Path, items: &[LineItem]) -> Result<(), PriceListError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let json = serde_json::to_string_pretty(items)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
