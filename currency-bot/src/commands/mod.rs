//! Chat commands and the table that routes command text to them.
//!
//! [`CommandRouter`] maps a command name (`conv`, `help`, ...) to an [`Command`] built once at
//! startup. Every recognised command produces exactly one reply text.

mod basic;
mod conv;
mod values;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use exchange_client::ConversionService;
use tracing::debug;

use crate::whitelist::CurrencyWhitelist;

pub use basic::{HelpCommand, InfoCommand, StartCommand, HELP_TEXT, INFO_TEXT, START_TEXT};
pub use conv::{parse_conv_args, ConvArgsError, ConvCommand};
pub use values::ValuesCommand;

/// One chat command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Name without the leading slash, e.g. `"conv"`.
    fn name(&self) -> &'static str;

    /// Produces the reply for the arguments following the command.
    async fn execute(&self, args: &[&str]) -> String;
}

/// Command text split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Splits `"/conv@MyBot usd eur 2"` into name `conv` and args `["usd", "eur", "2"]`.
/// Returns `None` for text that is not a command.
pub fn parse_command_line(text: &str) -> Option<ParsedCommand<'_>> {
    let mut tokens = text.split_whitespace();
    let head = tokens.next()?.strip_prefix('/')?;
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        name,
        args: tokens.collect(),
    })
}

/// Dispatch table from command name to command.
#[derive(Clone, Default)]
pub struct CommandRouter {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command under its name, replacing any previous one.
    pub fn register(mut self, command: Arc<dyn Command>) -> Self {
        self.commands.insert(command.name(), command);
        self
    }

    /// Router with `/start`, `/help`, `/info`, `/values` and `/conv`.
    pub fn with_default_commands(
        whitelist: Arc<CurrencyWhitelist>,
        service: Arc<dyn ConversionService>,
    ) -> Self {
        Self::new()
            .register(Arc::new(StartCommand))
            .register(Arc::new(HelpCommand))
            .register(Arc::new(InfoCommand))
            .register(Arc::new(ValuesCommand::new(whitelist.clone())))
            .register(Arc::new(ConvCommand::new(whitelist, service)))
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Runs the command in `text`. `None` when the text is not a registered command.
    pub async fn dispatch(&self, text: &str) -> Option<String> {
        let parsed = parse_command_line(text)?;
        let Some(command) = self.commands.get(parsed.name) else {
            debug!(command = %parsed.name, "Unknown command");
            return None;
        };
        Some(command.execute(&parsed.args).await)
    }
}
