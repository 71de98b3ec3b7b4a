use super::rates::{RateTable, default_rates};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency_a() -> String {
    "EUR".to_string()
}

fn default_currency_b() -> String {
    "VND".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_rates")]
    pub rates: BTreeMap<String, f64>,
    #[serde(default = "default_currency_a")]
    pub currency_a: String,
    #[serde(default = "default_currency_b")]
    pub currency_b: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rates: default_rates(),
            currency_a: default_currency_a(),
            currency_b: default_currency_b(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or the built-in defaults
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxpair", "fxpair")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds the rate table, checking that both default currencies are in it.
    pub fn rate_table(&self) -> Result<RateTable> {
        let table = RateTable::new(self.rates.iter().map(|(code, rate)| (code, *rate)))?;
        for code in [&self.currency_a, &self.currency_b] {
            if !table.contains(code) {
                bail!("Default currency {code} has no rate");
            }
        }
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        self.rate_table().map(|_| ())
    }
}
