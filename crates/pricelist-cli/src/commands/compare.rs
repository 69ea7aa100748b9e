use pricelist_core::compare::{best_prices, build_order, SupplierQuotes};
use pricelist_core::error::PriceListError;
use pricelist_core::model::LineItem;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::output;

pub fn run(
    catalog_file: PathBuf,
    quotes_file: PathBuf,
    reference: &str,
    quantities_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), PriceListError> {
    let catalog: Vec<LineItem> = serde_json::from_slice(&std::fs::read(&catalog_file)?)?;
    let quotes: SupplierQuotes = serde_json::from_slice(&std::fs::read(&quotes_file)?)?;
    tracing::info!(
        items = catalog.len(),
        suppliers = quotes.len(),
        "comparing prices"
    );

    let best = best_prices(&catalog, &quotes, reference);

    match quantities_file {
        Some(path) => {
            let quantities: BTreeMap<String, u32> = serde_json::from_slice(&std::fs::read(&path)?)?;
            let order = build_order(&best, &quantities);
            match output_format {
                "json" => output::json::print(&order)?,
                _ => output::table::print_order(&order),
            }
        }
        None => match output_format {
            "json" => output::json::print(&best)?,
            _ => output::table::print_best_prices(&best),
        },
    }

    Ok(())
}
