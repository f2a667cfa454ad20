//! HTTP client for the exchangerates_data convert endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::types::{Conversion, ConversionError, ConversionRequest, ConversionResult};

/// apilayer convert endpoint.
pub const DEFAULT_API_URL: &str = "https://api.apilayer.com/exchangerates_data/convert";

/// Upper bound for one provider round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Converts an amount from one currency to another. Implemented over HTTP by
/// [`ExchangeRatesClient`]; tests substitute their own.
#[async_trait]
pub trait ConversionService: Send + Sync {
    /// Performs one conversion. Never panics on provider misbehaviour; every failure is a
    /// [`ConversionError`].
    async fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}

/// exchangerates_data client.
#[derive(Debug, Clone)]
pub struct ExchangeRatesClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ExchangeRatesClient {
    /// Creates a client for `api_url` whose requests give up after `timeout`.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Sent as the `apikey` header.
    /// * `api_url` - Full URL of the convert endpoint (see [`DEFAULT_API_URL`]).
    /// * `timeout` - Total time allowed for connect, request and response body.
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Creates a client for the default endpoint and timeout.
    pub fn with_api_key(api_key: String) -> Result<Self, reqwest::Error> {
        Self::new(api_key, DEFAULT_API_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Returns the endpoint this client calls.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    result: Option<f64>,
}

/// Extracts the numeric `result` field from a 200 body.
fn parse_converted_amount(body: &str) -> Result<f64, ConversionError> {
    let response: ConvertResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "step: convert response is not the expected JSON");
        ConversionError::Parse
    })?;
    response.result.ok_or_else(|| {
        warn!("step: convert response has no result field");
        ConversionError::Parse
    })
}

/// Maps a non-200 status to its error kind; `None` for 200.
fn classify_status(status: StatusCode) -> Option<ConversionError> {
    match status {
        StatusCode::OK => None,
        StatusCode::BAD_REQUEST => Some(ConversionError::Input),
        other => Some(ConversionError::Http(other.as_u16())),
    }
}

#[async_trait]
impl ConversionService for ExchangeRatesClient {
    #[instrument(
        skip(self, request),
        fields(
            from = %request.source_currency,
            to = %request.target_currency,
            amount = request.amount
        )
    )]
    async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let amount = request.amount.to_string();
        info!("step: convert request");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("from", request.source_currency.as_str()),
                ("to", request.target_currency.as_str()),
                ("amount", amount.as_str()),
            ])
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "step: convert request failed");
                ConversionError::Connection
            })?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            warn!(status = status.as_u16(), kind = err.kind(), "step: convert rejected");
            return Err(err);
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "step: reading convert response failed");
            ConversionError::Connection
        })?;
        let converted_amount = parse_converted_amount(&body)?;

        info!(converted_amount = converted_amount, "step: convert done");
        Ok(Conversion {
            request: request.clone(),
            converted_amount,
        })
    }
}
