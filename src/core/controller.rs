//! Bidirectional converter controller
//!
//! The controller keeps two amount fields in sync. Whichever field the user
//! last focused or edited is the *active* side and is the only source of
//! truth; the controller writes exclusively to the other side, so its own
//! writes never feed back into a recomputation.

use super::format::{FAIL_SOFT_TEXT, format_amount};
use super::rates::{RateTable, convert, normalize_code};
use anyhow::{Result, bail};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::A => "A",
                Side::B => "B",
            }
        )
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            _ => Err(anyhow::anyhow!("Invalid side: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionState {
    pub amount_a: String,
    pub amount_b: String,
    pub currency_a: String,
    pub currency_b: String,
    pub active: Side,
}

impl ConversionState {
    pub fn amount(&self, side: Side) -> &str {
        match side {
            Side::A => &self.amount_a,
            Side::B => &self.amount_b,
        }
    }

    pub fn currency(&self, side: Side) -> &str {
        match side {
            Side::A => &self.currency_a,
            Side::B => &self.currency_b,
        }
    }

    fn amount_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::A => &mut self.amount_a,
            Side::B => &mut self.amount_b,
        }
    }

    fn currency_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::A => &mut self.currency_a,
            Side::B => &mut self.currency_b,
        }
    }
}

/// Outcome of a recomputation: the field written, its numeric value before
/// display rounding, and the text written to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recomputed {
    pub side: Side,
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Converter {
    rates: RateTable,
    state: ConversionState,
}

impl Converter {
    /// Creates a controller with empty amounts and side A active.
    pub fn new(rates: RateTable, currency_a: &str, currency_b: &str) -> Result<Self> {
        let (currency_a, currency_b) = (normalize_code(currency_a), normalize_code(currency_b));
        for code in [&currency_a, &currency_b] {
            if !rates.contains(code) {
                bail!("Currency {code} is not in the rate table");
            }
        }

        Ok(Self {
            rates,
            state: ConversionState {
                amount_a: String::new(),
                amount_b: String::new(),
                currency_a,
                currency_b,
                active: Side::A,
            },
        })
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    /// Handles a user edit on `side`, making it the source and rewriting the
    /// other side.
    ///
    /// Never called for the controller's own writes; suppressing toolkit
    /// echoes of those is the caller's job (see [`super::screen::Screen`]).
    pub fn on_field_edited(&mut self, side: Side, new_text: &str) -> Recomputed {
        debug!(%side, text = new_text, "Field edited");
        self.state.active = side;
        *self.state.amount_mut(side) = new_text.to_string();
        self.recompute()
    }

    /// Handles a selector change on `side`, rejecting codes not in the table.
    pub fn on_currency_changed(&mut self, side: Side, new_code: &str) -> Result<Recomputed> {
        let code = normalize_code(new_code);
        if !self.rates.contains(&code) {
            bail!("Unsupported currency: {new_code}");
        }

        debug!(%side, %code, "Currency changed");
        *self.state.currency_mut(side) = code;
        Ok(self.recompute())
    }

    /// Marks `side` as the source for the next computation.
    pub fn on_focus_gained(&mut self, side: Side) {
        debug!(%side, "Focus gained");
        self.state.active = side;
    }

    fn recompute(&mut self) -> Recomputed {
        let source = self.state.active;
        let target = source.other();

        let computed = parse_amount(self.state.amount(source)).and_then(|amount| {
            let src_rate = self.rates.rate_or_fallback(self.state.currency(source));
            let dst_rate = self.rates.rate_or_fallback(self.state.currency(target));
            let value = convert(amount, src_rate, dst_rate)?;
            format_amount(value).map(|text| (value, text))
        });

        let (value, text) = computed.unwrap_or_else(|| (0.0, FAIL_SOFT_TEXT.to_string()));
        debug!(%source, %target, value, %text, "Recomputed");
        *self.state.amount_mut(target) = text.clone();
        Recomputed {
            side: target,
            value,
            text,
        }
    }
}

/// Parses user input as a finite, non-negative amount.
///
/// Surrounding whitespace and `,` grouping separators are accepted so that a
/// formatted value can be edited in place.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> Converter {
        let rates = RateTable::new([("EUR", 1.0), ("VND", 27369.1043)]).unwrap();
        Converter::new(rates, "EUR", "VND").unwrap()
    }

    #[test]
    fn test_new_starts_empty_with_a_active() {
        let conv = converter();
        let state = conv.state();
        assert_eq!(state.amount_a, "");
        assert_eq!(state.amount_b, "");
        assert_eq!(state.currency_a, "EUR");
        assert_eq!(state.currency_b, "VND");
        assert_eq!(state.active, Side::A);
    }

    #[test]
    fn test_new_rejects_unknown_default_currency() {
        let err = Converter::new(RateTable::default(), "EUR", "GBP").unwrap_err();
        assert!(err.to_string().contains("GBP"));
    }

    #[test]
    fn test_edit_a_writes_b() {
        let mut conv = converter();
        let update = conv.on_field_edited(Side::A, "10");
        assert_eq!(update.side, Side::B);
        assert!((update.value - 273691.043).abs() < 1e-6);
        assert_eq!(update.text, "273,691.04");
        assert_eq!(conv.state().amount_b, "273,691.04");
        assert_eq!(conv.state().amount_a, "10");
    }

    #[test]
    fn test_edit_b_writes_a() {
        let mut conv = converter();
        let update = conv.on_field_edited(Side::B, "27369.1043");
        assert_eq!(update.side, Side::A);
        assert!((update.value - 1.0).abs() < 1e-12);
        assert_eq!(conv.state().amount_a, "1.00");
        assert_eq!(conv.state().active, Side::B);
    }

    #[test]
    fn test_empty_and_non_numeric_input_yield_zero() {
        let mut conv = converter();
        for text in ["", "   ", "abc", "1.2.3", "-5", "NaN", "inf", "12abc"] {
            let update = conv.on_field_edited(Side::A, text);
            assert_eq!(update.value, 0.0, "input {text:?}");
            assert_eq!(update.text, "0", "input {text:?}");
            assert_eq!(conv.state().amount_b, "0");
        }
    }

    #[test]
    fn test_empty_edit_on_inactive_side_at_startup() {
        let mut conv = converter();
        assert_eq!(conv.state().active, Side::A);

        let update = conv.on_field_edited(Side::B, "");
        assert_eq!(update.side, Side::A);
        assert_eq!(update.value, 0.0);
        assert_eq!(conv.state().active, Side::B);
        assert_eq!(conv.state().amount_a, "0");
    }

    #[test]
    fn test_retyping_inactive_side_text_takes_over() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");
        conv.on_currency_changed(Side::B, "EUR").unwrap();
        assert_eq!(conv.state().amount_b, "10.00");

        // Same text as the derived value, but a genuine user edit
        let update = conv.on_field_edited(Side::B, "10.00");
        assert_eq!(update.side, Side::A);
        assert_eq!(update.value, 10.0);
        assert_eq!(conv.state().active, Side::B);
        assert_eq!(conv.state().amount_a, "10.00");
    }

    #[test]
    fn test_user_edit_on_inactive_side_takes_over() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");

        let update = conv.on_field_edited(Side::B, "273,691.043");
        assert_eq!(update.side, Side::A);
        assert_eq!(conv.state().active, Side::B);
        assert!((update.value - 10.0).abs() < 1e-9);
        assert_eq!(conv.state().amount_a, "10.00");
    }

    #[test]
    fn test_currency_change_reuses_source_amount() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");

        let update = conv.on_currency_changed(Side::B, "EUR").unwrap();
        assert_eq!(update.side, Side::B);
        assert_eq!(update.value, 10.0);
        assert_eq!(conv.state().amount_a, "10");
        assert_eq!(conv.state().amount_b, "10.00");

        let update = conv.on_currency_changed(Side::A, "vnd").unwrap();
        assert_eq!(conv.state().currency_a, "VND");
        assert!((update.value - 10.0 / 27369.1043).abs() < 1e-12);
        assert_eq!(conv.state().active, Side::A);
    }

    #[test]
    fn test_currency_change_follows_active_side() {
        let mut conv = converter();
        conv.on_field_edited(Side::B, "27369.1043");

        let update = conv.on_currency_changed(Side::A, "VND").unwrap();
        assert_eq!(update.side, Side::A);
        assert!((update.value - 27369.1043).abs() < 1e-9);
        assert_eq!(conv.state().amount_b, "27369.1043");
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");
        let before = conv.state().clone();

        let err = conv.on_currency_changed(Side::B, "GBP").unwrap_err();
        assert!(err.to_string().contains("Unsupported currency"));
        assert_eq!(conv.state(), &before);
    }

    #[test]
    fn test_focus_does_not_change_values() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");
        let (a, b) = (conv.state().amount_a.clone(), conv.state().amount_b.clone());

        conv.on_focus_gained(Side::B);
        assert_eq!(conv.state().active, Side::B);
        assert_eq!(conv.state().amount_a, a);
        assert_eq!(conv.state().amount_b, b);
    }

    #[test]
    fn test_focus_then_currency_change_uses_focused_side() {
        let mut conv = converter();
        conv.on_field_edited(Side::A, "10");
        conv.on_focus_gained(Side::B);

        // B holds "273,691.04", which now drives A
        let update = conv.on_currency_changed(Side::B, "VND").unwrap();
        assert_eq!(update.side, Side::A);
        assert!((update.value - 273691.04 / 27369.1043).abs() < 1e-9);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Some(10.0));
        assert_eq!(parse_amount(" 2.5 "), Some(2.5));
        assert_eq!(parse_amount("1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("infinity"), None);
        assert_eq!(parse_amount("ten"), None);
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("a".parse::<Side>().unwrap(), Side::A);
        assert_eq!(" B ".parse::<Side>().unwrap(), Side::B);
        assert!("c".parse::<Side>().is_err());
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.to_string(), "B");
    }
}
