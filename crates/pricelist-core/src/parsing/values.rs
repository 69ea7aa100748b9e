use crate::error::LineError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of fractional digits printed price lists use for price and quantity.
pub const FRACTION_DIGITS: usize = 4;

/// Check whether a token has the printed-list number shape: `digits [,.] dddd`.
///
/// - "17,9900" -> true
/// - "4.0000" -> true
/// - "17,99" -> false (two fractional digits)
/// - "1.234,5600" -> false (grouping separators are not part of the layout)
pub fn is_fixed_point(token: &str) -> bool {
    let Some(sep) = token.find([',', '.']) else {
        return false;
    };
    let (int_part, rest) = token.split_at(sep);
    let frac = &rest[1..];
    // ASCII digits only, the same as item codes.
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac.len() == FRACTION_DIGITS
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a decimal amount, accepting a comma as the decimal separator.
///
/// The result is normalized, so "17,9900" becomes 17.99.
pub fn parse_amount(s: &str) -> Result<Decimal, LineError> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .map(|d| d.normalize())
        .map_err(|e| LineError::Conversion {
            value: s.to_string(),
            reason: e.to_string(),
        })
}
