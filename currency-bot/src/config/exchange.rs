//! Exchange provider config and the accepted currency list. Loaded from env.

use anyhow::Result;
use std::env;
use std::time::Duration;

use exchange_client::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

use crate::whitelist::CurrencyWhitelist;

/// Provider endpoint, credentials, timeout and accepted currencies.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// EXCHANGE_API_KEY
    pub api_key: String,
    /// EXCHANGE_API_URL
    pub api_url: String,
    /// EXCHANGE_TIMEOUT_SECS
    pub timeout_secs: u64,
    /// CURRENCIES, whitespace-separated
    pub currencies: CurrencyWhitelist,
}

impl ExchangeConfig {
    /// Load from environment variables. EXCHANGE_API_KEY and CURRENCIES are required.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("EXCHANGE_API_KEY")
            .map_err(|_| anyhow::anyhow!("EXCHANGE_API_KEY not set"))?;
        let currencies = env::var("CURRENCIES")
            .map(|s| CurrencyWhitelist::parse(&s))
            .map_err(|_| anyhow::anyhow!("CURRENCIES not set"))?;
        let api_url = env::var("EXCHANGE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = match env::var("EXCHANGE_TIMEOUT_SECS") {
            Ok(s) => s.trim().parse().map_err(|_| {
                anyhow::anyhow!("EXCHANGE_TIMEOUT_SECS is not a number of seconds: {}", s)
            })?,
            Err(_) => DEFAULT_TIMEOUT.as_secs(),
        };

        Ok(Self {
            api_key,
            api_url,
            timeout_secs,
            currencies,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate config: key set, URL valid, timeout positive, currency list non-empty and made of
    /// three-letter codes.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("EXCHANGE_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("EXCHANGE_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("EXCHANGE_TIMEOUT_SECS must be greater than zero");
        }
        if self.currencies.is_empty() {
            anyhow::bail!("CURRENCIES is empty");
        }
        let malformed = self.currencies.malformed_codes();
        if !malformed.is_empty() {
            anyhow::bail!(
                "CURRENCIES contains codes that are not three letters: {}",
                malformed.join(", ")
            );
        }
        Ok(())
    }
}
