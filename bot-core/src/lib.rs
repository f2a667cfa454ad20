//! # bot-core
//!
//! Core types and traits shared by the currency bot crates: [`Bot`], [`Handler`], message and user
//! types, errors and tracing initialization. Transport-agnostic; the Telegram binding lives in
//! `currency-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
