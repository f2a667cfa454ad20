//! BotConfig: BaseConfig + ExchangeConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, ExchangeConfig};
use crate::whitelist::CurrencyWhitelist;

/// Bot config, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub exchange: ExchangeConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let exchange = ExchangeConfig::from_env()?;
        Ok(Self { base, exchange })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.exchange.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn exchange(&self) -> &ExchangeConfig {
        &self.exchange
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn currencies(&self) -> &CurrencyWhitelist {
        &self.exchange.currencies
    }
}
