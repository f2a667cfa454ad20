//! Request and result types of a conversion, and their human-readable form.

use std::fmt;
use thiserror::Error;

/// Amount used when the user does not give one.
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// One conversion to perform. Currency codes are expected upper-case and already checked against
/// the configured currency list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source_currency: String,
    pub target_currency: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Builds a request; `amount` falls back to [`DEFAULT_AMOUNT`].
    pub fn new(
        source_currency: impl Into<String>,
        target_currency: impl Into<String>,
        amount: Option<f64>,
    ) -> Self {
        Self {
            source_currency: source_currency.into(),
            target_currency: target_currency.into(),
            amount: amount.unwrap_or(DEFAULT_AMOUNT),
        }
    }
}

/// A successful conversion. Displays as `"{amount} {FROM} = {converted} {TO}"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub converted_amount: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.request.amount,
            self.request.source_currency,
            self.converted_amount,
            self.request.target_currency
        )
    }
}

/// Why a conversion failed. `Display` is the fixed message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Provider unreachable or no response within the timeout.
    #[error("Error: connection to server error")]
    Connection,

    /// Provider answered 400: it rejected the currency pair or amount.
    #[error("Error: incorrect input")]
    Input,

    /// Provider answered with a status other than 200 or 400.
    #[error("Error: Error in HTTP request: {0}")]
    Http(u16),

    /// Provider answered 200 but the body has no numeric `result`.
    #[error("Error: unexpected response from server")]
    Parse,
}

impl ConversionError {
    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Connection => "ConnectionError",
            ConversionError::Input => "InputError",
            ConversionError::Http(_) => "HttpError",
            ConversionError::Parse => "ParseError",
        }
    }
}

pub type ConversionResult = Result<Conversion, ConversionError>;

/// Human-readable reply for either outcome.
pub fn format_result(result: &ConversionResult) -> String {
    match result {
        Ok(conversion) => conversion.to_string(),
        Err(e) => e.to_string(),
    }
}
