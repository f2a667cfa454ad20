//! `/values`: lists the accepted currencies.

use std::sync::Arc;

use async_trait::async_trait;

use super::Command;
use crate::whitelist::CurrencyWhitelist;

pub struct ValuesCommand {
    whitelist: Arc<CurrencyWhitelist>,
}

impl ValuesCommand {
    pub fn new(whitelist: Arc<CurrencyWhitelist>) -> Self {
        Self { whitelist }
    }
}

#[async_trait]
impl Command for ValuesCommand {
    fn name(&self) -> &'static str {
        "values"
    }

    async fn execute(&self, _args: &[&str]) -> String {
        format!("Possible currencies: {}", self.whitelist)
    }
}
