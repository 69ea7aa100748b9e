use super::tokens::{tokenize, Token};
use super::values::is_fixed_point;

/// The five fields of a catalog line, borrowed from the trimmed input.
///
/// Layout: `<code> <description> <unit> <price> <quantity>`, e.g.
/// `55885 ACUCAR DE COCO 150G UNILIFE CX 48 UN UN 17,9900 4,0000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub code: &'a str,
    pub description: &'a str,
    pub unit: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
}

/// Fields in the order they are checked. The description comes last and
/// takes whatever lies between the code and the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Quantity,
    Price,
    Unit,
    Description,
}

/// Why a line did not match. Callers treat every variant as "no match".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    TooFewTokens(usize),
    Malformed(Field),
}

const MIN_TOKENS: usize = 5;

/// Match a line against the catalog layout, anchored at both ends.
pub fn match_line(line: &str) -> Option<LineMatch<'_>> {
    parse_line(line).ok()
}

/// Same as [`match_line`] but reports which field broke the layout.
pub fn parse_line(line: &str) -> Result<LineMatch<'_>, Mismatch> {
    let line = line.trim();
    let tokens = tokenize(line);
    let n = tokens.len();
    if n < MIN_TOKENS {
        return Err(Mismatch::TooFewTokens(n));
    }

    let code = expect(&tokens[0], Field::Code, is_code)?;
    let quantity = expect(&tokens[n - 1], Field::Quantity, is_fixed_point)?;
    let price = expect(&tokens[n - 2], Field::Price, is_fixed_point)?;
    let unit = expect(&tokens[n - 3], Field::Unit, is_unit)?;

    // Everything between the code and the unit, spacing preserved. A
    // description never spans a line break, though the gaps around the
    // fixed fields may.
    let description = &line[tokens[1].start..tokens[n - 4].end];
    if description.contains('\n') {
        return Err(Mismatch::Malformed(Field::Description));
    }

    Ok(LineMatch {
        code,
        description,
        unit,
        price,
        quantity,
    })
}

fn expect<'a>(
    token: &Token<'a>,
    field: Field,
    accept: impl Fn(&str) -> bool,
) -> Result<&'a str, Mismatch> {
    if accept(token.text) {
        Ok(token.text)
    } else {
        Err(Mismatch::Malformed(field))
    }
}

// ASCII only: codes in printed lists are plain digits, and `is_fixed_point`
// takes the same view of price and quantity.
fn is_code(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_unit(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}
