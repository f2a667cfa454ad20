//! Commands answering with fixed text.

use async_trait::async_trait;

use super::Command;

pub const START_TEXT: &str = "Currency converter\ntype /help for usage";

pub const HELP_TEXT: &str = "/help - this message\n\
/conv from to (amount) - convert currencies, default amount = 1\n\
/values - possible currencies\n\
/info - bot version\n\
Examples:\n\
/conv usd rub\n\
/conv eur usd 15.5";

pub const INFO_TEXT: &str = concat!("Currency converter bot v", env!("CARGO_PKG_VERSION"));

/// `/start`: welcome pointing at `/help`.
pub struct StartCommand;

#[async_trait]
impl Command for StartCommand {
    fn name(&self) -> &'static str {
        "start"
    }

    async fn execute(&self, _args: &[&str]) -> String {
        START_TEXT.to_string()
    }
}

/// `/help`: usage.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, _args: &[&str]) -> String {
        HELP_TEXT.to_string()
    }
}

/// `/info`: bot version.
pub struct InfoCommand;

#[async_trait]
impl Command for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    async fn execute(&self, _args: &[&str]) -> String {
        INFO_TEXT.to_string()
    }
}
