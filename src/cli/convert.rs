use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Converter, Side};
use anyhow::{Context, Result};
use tracing::debug;

/// Enters `amount` into field A and returns the rendered outcome.
pub fn run(
    config: &AppConfig,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<String> {
    let rates = config.rate_table()?;
    let from = from.unwrap_or(&config.currency_a);
    let to = to.unwrap_or(&config.currency_b);
    debug!(amount, from, to, "Converting");

    let mut converter = Converter::new(rates, from, to)?;
    converter.on_field_edited(Side::A, amount);
    let state = converter.state();

    if json {
        return serde_json::to_string_pretty(state).context("Failed to serialize result");
    }

    Ok(format!(
        "{} {} = {} {}",
        amount.trim(),
        ui::style_text(&state.currency_a, ui::StyleType::Label),
        ui::style_text(&state.amount_b, ui::StyleType::Value),
        ui::style_text(&state.currency_b, ui::StyleType::Label),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_uses_config_defaults() {
        console::set_colors_enabled(false);
        let output = run(&AppConfig::default(), "10", None, None, false).unwrap();
        assert_eq!(output, "10 EUR = 273,691.04 VND");
    }

    #[test]
    fn test_convert_with_explicit_pair() {
        console::set_colors_enabled(false);
        let output = run(&AppConfig::default(), "27369.1043", Some("vnd"), Some("eur"), false)
            .unwrap();
        assert_eq!(output, "27369.1043 VND = 1.00 EUR");
    }

    #[test]
    fn test_convert_json() {
        let output = run(&AppConfig::default(), "abc", None, None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["amount_a"], "abc");
        assert_eq!(value["amount_b"], "0");
        assert_eq!(value["active"], "A");
    }

    #[test]
    fn test_convert_rejects_unknown_currency() {
        let err = run(&AppConfig::default(), "1", Some("GBP"), None, false).unwrap_err();
        assert!(err.to_string().contains("GBP"));
    }
}
