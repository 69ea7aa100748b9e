use pricelist_core::error::PriceListError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), PriceListError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
