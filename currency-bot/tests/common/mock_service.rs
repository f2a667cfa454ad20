//! Mock [`ConversionService`] answering with a fixed outcome and recording requests.

use async_trait::async_trait;
use exchange_client::{Conversion, ConversionError, ConversionRequest, ConversionResult, ConversionService};
use std::sync::Mutex;

pub struct MockConversionService {
    outcome: Result<f64, ConversionError>,
    requests: Mutex<Vec<ConversionRequest>>,
}

impl MockConversionService {
    /// Every conversion yields `converted_amount`.
    pub fn returning(converted_amount: f64) -> Self {
        Self {
            outcome: Ok(converted_amount),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every conversion fails with `error`.
    pub fn failing(error: ConversionError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ConversionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ConversionService for MockConversionService {
    async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.map(|converted_amount| Conversion {
            request: request.clone(),
            converted_amount,
        })
    }
}
