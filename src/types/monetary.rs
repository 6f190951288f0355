use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// Rounds to cents (midpoint away from zero) and pins the scale so the value always prints two decimals.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded
}

/// Parses an amount as written in a statement export.
///
/// Plain decimals (`100.004`, `-5`, `1e3`) are read as-is. A value containing a comma must
/// be pt-BR formatted, where `.` groups thousands and `,` marks the decimals; any other
/// use of commas (`1,234.56`) is rejected.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    let value = if value.contains(',') {
        localized_to_plain(value)?
    } else {
        value.to_string()
    };

    Decimal::from_str(&value)
        .or_else(|_| Decimal::from_scientific(&value))
        .ok()
}

/// Rewrites `1.234,56` as `1234.56`. Returns `None` unless the value has a single comma,
/// only digits after it, and `.` separating groups of exactly three digits before it.
fn localized_to_plain(value: &str) -> Option<String> {
    let (integer, fraction) = value.split_once(',')?;

    if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let unsigned = integer.strip_prefix(['-', '+']).unwrap_or(integer);
    let mut groups = unsigned.split('.');
    let leading = groups.next()?;

    let grouped = unsigned.contains('.');

    if leading.is_empty() || (grouped && leading.len() > 3) || !leading.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if !groups.all(|group| group.len() == 3 && group.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let sign = if integer.starts_with('-') { "-" } else { "" };

    Some(format!("{sign}{}.{fraction}", unsigned.replace('.', "")))
}
