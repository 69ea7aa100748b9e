use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One validated description/price pair from a supplier price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub price: Decimal,
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - R$ {:.2}", self.description, self.price)
    }
}

/// Counters for lines that were looked at but did not become items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub pages: usize,
    pub tables: usize,
    pub candidate_lines: usize,
    pub matched_lines: usize,
    pub rejected_by_validation: usize,
    pub rejected_as_duplicate: usize,
    pub conversion_errors: usize,
    /// Pages on which the plain-text pass ran.
    pub fallback_pages: usize,
}

impl ExtractionStats {
    pub fn fallback_triggered(&self) -> bool {
        self.fallback_pages > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Unique by description, in first-seen order.
    pub items: Vec<LineItem>,
    pub stats: ExtractionStats,
}

/// What the infallible entry point hands back to callers.
///
/// `diagnostic` is set when the document could not be read; `items` is
/// then empty and the caller must leave its stored catalog alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub items: Vec<LineItem>,
    pub stats: ExtractionStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl From<ExtractionResult> for ExtractionOutcome {
    fn from(result: ExtractionResult) -> Self {
        ExtractionOutcome {
            items: result.items,
            stats: result.stats,
            diagnostic: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_uses_two_decimals() {
        let item = LineItem {
            description: "DIPIRONA 500MG CX 10".into(),
            price: dec!(4.5),
        };
        assert_eq!(item.to_string(), "DIPIRONA 500MG CX 10 - R$ 4.50");
    }

    #[test]
    fn test_price_serializes_as_string() {
        let item = LineItem {
            description: "SORO FISIOLOGICO 500ML".into(),
            price: dec!(17.99),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"description":"SORO FISIOLOGICO 500ML","price":"17.99"}"#);
    }

    #[test]
    fn test_fallback_triggered() {
        let mut stats = ExtractionStats::default();
        assert!(!stats.fallback_triggered());
        stats.fallback_pages = 1;
        assert!(stats.fallback_triggered());
    }
}
