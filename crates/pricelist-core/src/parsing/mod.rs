pub mod line;
pub mod tokens;
pub mod values;

use crate::config::ExtractorConfig;
use crate::error::LineError;
use crate::model::LineItem;
use line::match_line;
use rust_decimal::Decimal;
use values::parse_amount;

/// Why a matching line was not turned into an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    DescriptionLength(usize),
    PriceOutOfRange(Decimal),
}

/// Result of running one raw line through the matcher and validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Not a catalog line (headers, footers, wrapped text).
    NoMatch,
    Conversion(LineError),
    Rejected(Rejection),
    Item(LineItem),
}

/// Match, convert and validate a single raw line.
pub fn evaluate_line(raw: &str, config: &ExtractorConfig) -> LineOutcome {
    let Some(m) = match_line(raw) else {
        return LineOutcome::NoMatch;
    };

    let price = match parse_amount(m.price) {
        Ok(p) => p,
        Err(e) => return LineOutcome::Conversion(e),
    };

    let description = m.description.trim();
    if let Some(rejection) = validate(description, price, config) {
        return LineOutcome::Rejected(rejection);
    }

    LineOutcome::Item(LineItem {
        description: description.to_string(),
        price,
    })
}

fn validate(description: &str, price: Decimal, config: &ExtractorConfig) -> Option<Rejection> {
    let chars = description.chars().count();
    if chars < config.min_description_chars || chars > config.max_description_chars {
        return Some(Rejection::DescriptionLength(chars));
    }
    if price < config.min_price || price > config.max_price {
        return Some(Rejection::PriceOutOfRange(price));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn evaluate(raw: &str) -> LineOutcome {
        evaluate_line(raw, &ExtractorConfig::default())
    }

    #[test]
    fn test_sample_line_becomes_item() {
        let outcome = evaluate("55885 ACUCAR DE COCO 150G UNILIFE CX 48 UN UN 17,9900 4,0000");
        assert_eq!(
            outcome,
            LineOutcome::Item(LineItem {
                description: "ACUCAR DE COCO 150G UNILIFE CX 48 UN".into(),
                price: dec!(17.99),
            })
        );
    }

    #[test]
    fn test_price_upper_bound() {
        assert_eq!(
            evaluate("1 SERINGA 10ML UN 10000,0000 1,0000"),
            LineOutcome::Rejected(Rejection::PriceOutOfRange(dec!(10000)))
        );
        assert!(matches!(
            evaluate("1 SERINGA 10ML UN 9999,9900 1,0000"),
            LineOutcome::Item(_)
        ));
    }

    #[test]
    fn test_price_lower_bound() {
        assert_eq!(
            evaluate("1 SERINGA 10ML UN 0,0000 1,0000"),
            LineOutcome::Rejected(Rejection::PriceOutOfRange(dec!(0)))
        );
        assert!(matches!(
            evaluate("1 SERINGA 10ML UN 0,0100 1,0000"),
            LineOutcome::Item(_)
        ));
    }

    #[test]
    fn test_two_char_description_rejected() {
        assert_eq!(
            evaluate("1 AB UN 5,0000 1,0000"),
            LineOutcome::Rejected(Rejection::DescriptionLength(2))
        );
    }

    #[test]
    fn test_description_length_counts_chars_not_bytes() {
        // 3 chars, 6 bytes.
        assert!(matches!(
            evaluate("1 ÁÇÃ UN 5,0000 1,0000"),
            LineOutcome::Item(_)
        ));
    }

    #[test]
    fn test_long_description_rejected() {
        let desc = "X".repeat(201);
        let line = format!("1 {desc} UN 5,0000 1,0000");
        assert_eq!(
            evaluate(&line),
            LineOutcome::Rejected(Rejection::DescriptionLength(201))
        );
    }

    #[test]
    fn test_unparseable_price_is_conversion_error() {
        let line = "1 SORO 500ML UN 99999999999999999999999999999999,0000 1,0000";
        assert!(matches!(evaluate(line), LineOutcome::Conversion(_)));
    }

    #[test]
    fn test_non_matching_line() {
        assert_eq!(evaluate("TABELA DE PRECOS 04/08"), LineOutcome::NoMatch);
    }

    #[test]
    fn test_wrapped_description_is_no_match() {
        assert_eq!(
            evaluate("55885 ACUCAR DE COCO\n150G UNILIFE UN 17,9900 4,0000"),
            LineOutcome::NoMatch
        );
    }

    #[test]
    fn test_custom_bounds() {
        let config = ExtractorConfig {
            max_price: dec!(10),
            ..Default::default()
        };
        assert!(matches!(
            evaluate_line("1 SERINGA 10ML UN 17,9900 1,0000", &config),
            LineOutcome::Rejected(Rejection::PriceOutOfRange(_))
        ));
    }
}
