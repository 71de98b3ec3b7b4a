//! Display formatting for converted amounts

use rust_decimal::{Decimal, RoundingStrategy};

/// Text written to a field when a value cannot be computed.
pub const FAIL_SOFT_TEXT: &str = "0";

/// Formats `value` as `#,##0.00`: two fractional digits, comma grouping,
/// half-even rounding of the exact binary value of `value`.
///
/// Returns `None` for values that have no decimal representation (NaN,
/// infinities, magnitudes beyond `Decimal`).
pub fn format_amount(value: f64) -> Option<String> {
    let mut decimal = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    decimal.rescale(2);

    let plain = decimal.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let sign = if decimal.is_sign_negative() && !decimal.is_zero() {
        "-"
    } else {
        ""
    };
    Some(format!("{sign}{}.{frac_part}", group_thousands(int_part)))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
