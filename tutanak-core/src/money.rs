//! Money parsing and formatting using rust_decimal for precision
//!
//! Amounts are typed by staff in Turkish notation (thousands separator `.`,
//! decimal separator `,`) and printed the same way. All arithmetic is done
//! with `Decimal`; nothing is ever converted between currencies.

use rust_decimal::prelude::*;
use shared::models::Currency;

/// Fraction digits kept when formatting (half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Largest amount a single payment may carry, in any currency
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Parse a raw amount string.
///
/// - a comma is the decimal marker and every dot is a thousands separator
/// - without a comma, dots are thousands separators when every group after
///   the first has exactly three digits (`17.500`), otherwise a single dot is
///   the decimal marker (`12.5`)
///
/// Returns `None` for empty or unparsable input. Sign is preserved; see
/// [`positive_amount`] for the ledger's inclusion rule.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let normalized = if compact.contains(DECIMAL_SEPARATOR) {
        compact
            .replace(THOUSANDS_SEPARATOR, "")
            .replace(DECIMAL_SEPARATOR, ".")
    } else if is_thousands_grouped(&compact) {
        compact.replace(THOUSANDS_SEPARATOR, "")
    } else {
        compact
    };

    if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
    {
        return None;
    }

    Decimal::from_str(&normalized).ok()
}

/// `17.500` / `1.250.000` style: dots only between three-digit groups
fn is_thousands_grouped(text: &str) -> bool {
    let mut groups = text.split(THOUSANDS_SEPARATOR);
    let head = groups.next().unwrap_or_default();
    let tail: Vec<&str> = groups.collect();
    !tail.is_empty()
        && !head.trim_start_matches(['-', '+']).is_empty()
        && tail
            .iter()
            .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// True when `value` is within `±MAX_AMOUNT`
pub fn is_amount_in_range(value: Decimal) -> bool {
    value.abs() <= Decimal::from(MAX_AMOUNT)
}

/// Parsed amount when it is positive after rounding and within
/// [`MAX_AMOUNT`]; anything else is "not yet entered" and contributes
/// nothing to totals.
pub fn positive_amount(raw: &str) -> Option<Decimal> {
    parse_amount(raw).filter(|v| {
        v.is_sign_positive() && !round_money(*v).is_zero() && is_amount_in_range(*v)
    })
}

/// Round to two fraction digits (half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Turkish display form without symbol: `25000` → `25.000`, `1234.5` → `1.234,5`
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

/// Amount followed by the currency symbol: `17.500 ₺`
pub fn format_money(value: Decimal, currency: Currency) -> String {
    format!("{} {}", format_amount(value), currency.symbol())
}
