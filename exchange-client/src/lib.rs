//! # Exchange client
//!
//! Converts an amount between two currencies through the `exchangerates_data` convert endpoint
//! (apilayer) and classifies the outcome.
//!
//! ## ExchangeRatesClient
//!
//! Issues one `GET {api_url}?from=..&to=..&amount=..` per call with the `apikey` header. No retries,
//! no caching; every request is bounded by a timeout.
//!
//! | Provider outcome                     | Result                          |
//! |--------------------------------------|---------------------------------|
//! | connect failure / timeout            | [`ConversionError::Connection`] |
//! | HTTP 400                             | [`ConversionError::Input`]      |
//! | any other non-200 status             | [`ConversionError::Http`]       |
//! | HTTP 200 without numeric `result`    | [`ConversionError::Parse`]      |
//! | HTTP 200 with `result`               | [`Conversion`]                  |
//!
//! ## Example
//!
//! ```rust,no_run
//! use exchange_client::{ConversionRequest, ConversionService, ExchangeRatesClient};
//!
//! async fn example() -> Result<(), reqwest::Error> {
//!     let client = ExchangeRatesClient::with_api_key("your-api-key".to_string())?;
//!     let request = ConversionRequest::new("USD", "EUR", Some(15.5));
//!     match client.convert(&request).await {
//!         Ok(conversion) => println!("{}", conversion),
//!         Err(e) => println!("{}", e),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod types;

pub use client::{ConversionService, ExchangeRatesClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use types::{
    format_result, Conversion, ConversionError, ConversionRequest, ConversionResult,
    DEFAULT_AMOUNT,
};
