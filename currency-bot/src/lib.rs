//! # Currency bot
//!
//! Telegram bot that converts currencies. Wires the command router, the exchange client and the
//! handler chain, loads config from env and runs the teloxide REPL.
//!
//! Commands: `/start`, `/help`, `/info`, `/values`, `/conv FROM TO [AMOUNT]`.

pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;
pub mod whitelist;

pub use cli::{load_config, Cli, Commands};
pub use commands::{parse_command_line, Command, CommandRouter, ParsedCommand};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, ExchangeConfig};
pub use handlers::{CommandHandler, LoggingHandler};
pub use runner::run_bot;
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use whitelist::CurrencyWhitelist;
