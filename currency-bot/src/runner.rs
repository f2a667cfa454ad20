//! Main entry: validate config, init logging, build components, run the REPL.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Runs the bot until the REPL exits.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    bot_core::init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        currencies = config.currencies().len(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain =
        build_handler_chain(components.router.clone(), components.bot_adapter.clone());

    info!("Bot started successfully");

    run_repl(components.teloxide_bot, handler_chain).await
}
