//! Static exchange-rate table and the cross-conversion formula

use anyhow::{Result, bail};
use std::collections::BTreeMap;
use tracing::debug;

/// Rate used for a code missing from the table.
pub const FALLBACK_RATE: f64 = 1.0;

/// Currency code to "units per reference unit" mapping.
///
/// Every rate is relative to a shared reference currency (rate 1.0), so any
/// pair converts through the same formula without a rate matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Builds a table, normalizing codes to upper case.
    ///
    /// Fails on an empty table, a blank code, a duplicate code or a rate that
    /// is not finite and strictly positive.
    pub fn new<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in entries {
            let code = normalize_code(code.as_ref());
            if code.is_empty() {
                bail!("Currency code must not be empty");
            }
            if !rate.is_finite() || rate <= 0.0 {
                bail!("Invalid rate for {code}: {rate}");
            }
            if rates.insert(code.clone(), rate).is_some() {
                bail!("Duplicate currency code: {code}");
            }
        }

        if rates.is_empty() {
            bail!("Rate table must contain at least one currency");
        }
        debug!(currencies = rates.len(), "Built rate table");
        Ok(Self { rates })
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&normalize_code(code)).copied()
    }

    /// Rate for `code`, falling back to [`FALLBACK_RATE`] for unknown codes.
    pub fn rate_or_fallback(&self, code: &str) -> f64 {
        self.rate(code).unwrap_or_else(|| {
            debug!(code, "Unknown currency, using fallback rate");
            FALLBACK_RATE
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    /// Codes in sorted order, as offered by a selector.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: default_rates(),
        }
    }
}

/// The built-in EUR/VND table.
pub fn default_rates() -> BTreeMap<String, f64> {
    BTreeMap::from([("EUR".to_string(), 1.0), ("VND".to_string(), 27369.1043)])
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Converts `amount` between two currencies given their rates.
///
/// Returns `None` when the source rate is zero or the result is not finite.
pub fn convert(amount: f64, src_rate: f64, dst_rate: f64) -> Option<f64> {
    if src_rate == 0.0 {
        return None;
    }
    let result = amount * dst_rate / src_rate;
    result.is_finite().then_some(result)
}
