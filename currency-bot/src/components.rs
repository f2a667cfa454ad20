//! Builds the long-lived pieces of the bot from config: teloxide Bot, Bot adapter, exchange
//! client, command router, handler chain.

use std::sync::Arc;

use anyhow::Result;
use bot_core::Bot as CoreBot;
use exchange_client::{ConversionService, ExchangeRatesClient};
use handler_chain::HandlerChain;
use teloxide::Bot;
use tracing::{info, instrument};

use crate::commands::CommandRouter;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

/// Shared, immutable components. Cheap to clone.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_adapter: Arc<dyn CoreBot>,
    pub router: Arc<CommandRouter>,
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when configured.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds all components from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let exchange = config.exchange();
    let conversion_service: Arc<dyn ConversionService> = Arc::new(
        ExchangeRatesClient::new(
            exchange.api_key.clone(),
            exchange.api_url.clone(),
            exchange.timeout(),
        )
        .map_err(|e| anyhow::anyhow!("Failed to create exchange HTTP client: {}", e))?,
    );

    let router = Arc::new(CommandRouter::with_default_commands(
        Arc::new(config.currencies().clone()),
        conversion_service,
    ));
    info!(
        commands = ?router.names(),
        currencies = %config.currencies(),
        api_url = %exchange.api_url,
        "Components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        router,
    })
}

/// Chain: LoggingHandler, then CommandHandler replying through `bot`.
pub fn build_handler_chain(router: Arc<CommandRouter>, bot: Arc<dyn CoreBot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(router, bot)))
}
