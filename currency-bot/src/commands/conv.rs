//! `/conv FROM TO [AMOUNT]`: validates the arguments and asks the conversion service.

use std::sync::Arc;

use async_trait::async_trait;
use exchange_client::{format_result, ConversionRequest, ConversionService};
use thiserror::Error;
use tracing::{info, instrument};

use super::Command;
use crate::whitelist::CurrencyWhitelist;

/// Arguments rejected before any provider call. `Display` is the reply text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvArgsError {
    /// Fewer than two arguments, or an amount that is not a finite number.
    #[error("Incorrect input")]
    Malformed,

    /// Code not in the configured currency list.
    #[error("Incorrect currency {0}")]
    UnknownCurrency(String),
}

/// Turns `["usd", "eur", "15.5"]` into a request. Arguments after the amount are ignored. The
/// amount is parsed before the codes are checked; the source code is checked before the target code.
pub fn parse_conv_args(
    args: &[&str],
    whitelist: &CurrencyWhitelist,
) -> Result<ConversionRequest, ConvArgsError> {
    let (from, to, amount) = match args {
        [from, to] => (*from, *to, None),
        [from, to, amount, ..] => {
            let amount: f64 = amount.parse().map_err(|_| ConvArgsError::Malformed)?;
            if !amount.is_finite() {
                return Err(ConvArgsError::Malformed);
            }
            (*from, *to, Some(amount))
        }
        _ => return Err(ConvArgsError::Malformed),
    };

    let from = from.to_uppercase();
    let to = to.to_uppercase();
    for code in [&from, &to] {
        if !whitelist.contains(code) {
            return Err(ConvArgsError::UnknownCurrency(code.clone()));
        }
    }

    Ok(ConversionRequest::new(from, to, amount))
}

pub struct ConvCommand {
    whitelist: Arc<CurrencyWhitelist>,
    service: Arc<dyn ConversionService>,
}

impl ConvCommand {
    pub fn new(whitelist: Arc<CurrencyWhitelist>, service: Arc<dyn ConversionService>) -> Self {
        Self { whitelist, service }
    }
}

#[async_trait]
impl Command for ConvCommand {
    fn name(&self) -> &'static str {
        "conv"
    }

    #[instrument(skip(self))]
    async fn execute(&self, args: &[&str]) -> String {
        let request = match parse_conv_args(args, &self.whitelist) {
            Ok(request) => request,
            Err(e) => {
                info!(reason = %e, "step: conv arguments rejected");
                return e.to_string();
            }
        };

        let result = self.service.convert(&request).await;
        if let Err(ref e) = result {
            info!(kind = e.kind(), "step: conversion failed");
        }
        format_result(&result)
    }
}
