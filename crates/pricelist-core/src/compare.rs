//! Lowest-price comparison between the reference supplier's list and
//! prices quoted by other suppliers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::LineItem;

/// Supplier name -> item description -> quoted price.
pub type SupplierQuotes = BTreeMap<String, BTreeMap<String, Decimal>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPrice {
    pub description: String,
    pub supplier: String,
    pub price: Decimal,
    pub reference_price: Decimal,
}

impl BestPrice {
    /// How much cheaper than the reference list, zero if the reference wins.
    pub fn saving(&self) -> Decimal {
        self.reference_price - self.price
    }
}

/// For each catalog item that at least one supplier quoted, pick the
/// lowest price.
///
/// Quotes of zero or less mean "not quoted". On a tie the reference
/// supplier wins, then suppliers in name order. Output is sorted by
/// description.
pub fn best_prices(catalog: &[LineItem], quotes: &SupplierQuotes, reference: &str) -> Vec<BestPrice> {
    let mut out = Vec::new();

    for item in catalog {
        let mut best_supplier: &str = reference;
        let mut best_price = item.price;
        let mut quoted = false;

        for (supplier, prices) in quotes {
            let Some(&price) = prices.get(&item.description) else {
                continue;
            };
            if price <= Decimal::ZERO {
                continue;
            }
            quoted = true;
            if price < best_price {
                best_price = price;
                best_supplier = supplier.as_str();
            }
        }

        if quoted {
            out.push(BestPrice {
                description: item.description.clone(),
                supplier: best_supplier.to_string(),
                price: best_price,
                reference_price: item.price,
            });
        }
    }

    out.sort_by(|a, b| a.description.cmp(&b.description));
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub description: String,
    pub supplier: String,
    pub price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

/// Turn best prices into a purchase order. Items without a positive
/// quantity are left out.
pub fn build_order(best: &[BestPrice], quantities: &BTreeMap<String, u32>) -> Order {
    let mut order = Order::default();

    for bp in best {
        let quantity = quantities.get(&bp.description).copied().unwrap_or(0);
        if quantity == 0 {
            continue;
        }
        let subtotal = bp.price * Decimal::from(quantity);
        order.total += subtotal;
        order.lines.push(OrderLine {
            description: bp.description.clone(),
            supplier: bp.supplier.clone(),
            price: bp.price,
            quantity,
            subtotal,
        });
    }

    order
}
