use anyhow::Result;
use async_trait::async_trait;

use crate::core::rate::{ExchangeRate, RateQuote, RateSource};

/// Serves a constant rate, no network involved.
pub struct FixedRateSource {
    rate: ExchangeRate,
}

impl FixedRateSource {
    pub fn new(rate: ExchangeRate) -> Self {
        FixedRateSource { rate }
    }
}

impl Default for FixedRateSource {
    fn default() -> Self {
        Self::new(ExchangeRate::FIXED)
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_rate(&self) -> Result<RateQuote> {
        Ok(RateQuote {
            rate: self.rate,
            source: "fixed".to_string(),
            updated_at: None,
        })
    }
}
