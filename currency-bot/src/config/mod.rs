//! Bot configuration: BaseConfig (Telegram + log) + ExchangeConfig (provider + currency list).

mod base;
mod bot_config;
mod exchange;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use exchange::ExchangeConfig;
