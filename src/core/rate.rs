//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, warn};

use super::error::ConversionError;

pub const BASE_CURRENCY: &str = "KRW";
pub const TARGET_CURRENCY: &str = "BRL";

/// Real per Won. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// 1 Won = 0.0038 Real
    pub const FIXED: ExchangeRate = ExchangeRate(0.0038);

    pub fn new(value: f64) -> Result<Self, ConversionError> {
        if value.is_finite() && value > 0.0 {
            Ok(ExchangeRate(value))
        } else {
            Err(ConversionError::InvalidRate(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::FIXED
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = ConversionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ExchangeRate::new(value)
    }
}

impl From<ExchangeRate> for f64 {
    fn from(rate: ExchangeRate) -> f64 {
        rate.0
    }
}

impl Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rate together with where and when it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub rate: ExchangeRate,
    pub source: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle of the session's single rate value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RateState {
    #[default]
    Pending,
    Available(ExchangeRate),
    Unavailable,
}

impl RateState {
    pub fn rate(&self) -> Option<ExchangeRate> {
        match self {
            RateState::Available(rate) => Some(*rate),
            RateState::Pending | RateState::Unavailable => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RateState::Pending)
    }
}

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current KRW to BRL rate.
    async fn fetch_rate(&self) -> Result<RateQuote>;
}

/// Runs a single fetch against `source`. Failures are logged and reported as
/// `Unavailable`; they are never retried.
pub async fn resolve_rate(source: &dyn RateSource) -> (RateState, Option<RateQuote>) {
    match source.fetch_rate().await {
        Ok(quote) => {
            debug!(rate = %quote.rate, source = %quote.source, "Exchange rate resolved");
            (RateState::Available(quote.rate), Some(quote))
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch exchange rate");
            (RateState::Unavailable, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct StaticSource(Option<f64>);

    #[async_trait]
    impl RateSource for StaticSource {
        async fn fetch_rate(&self) -> Result<RateQuote> {
            match self.0 {
                Some(value) => Ok(RateQuote {
                    rate: ExchangeRate::new(value)?,
                    source: "static".to_string(),
                    updated_at: None,
                }),
                None => Err(anyhow!("network down")),
            }
        }
    }

    #[test]
    fn test_exchange_rate_rejects_non_positive() {
        assert!(ExchangeRate::new(0.0038).is_ok());
        assert_eq!(ExchangeRate::new(0.0), Err(ConversionError::InvalidRate(0.0)));
        assert!(ExchangeRate::new(-1.0).is_err());
        assert!(ExchangeRate::new(f64::NAN).is_err());
        assert!(ExchangeRate::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_exchange_rate_deserialization_validates() {
        let rate: ExchangeRate = serde_yaml::from_str("0.005").unwrap();
        assert_eq!(rate.value(), 0.005);
        assert!(serde_yaml::from_str::<ExchangeRate>("-0.5").is_err());
    }

    #[test]
    fn test_rate_state_only_available_has_rate() {
        assert_eq!(RateState::Pending.rate(), None);
        assert_eq!(RateState::Unavailable.rate(), None);
        assert_eq!(
            RateState::Available(ExchangeRate::FIXED).rate(),
            Some(ExchangeRate::FIXED)
        );
        assert!(RateState::default().is_pending());
    }

    #[tokio::test]
    async fn test_resolve_rate_success() {
        let (state, quote) = resolve_rate(&StaticSource(Some(0.004))).await;
        assert_eq!(state.rate().map(|r| r.value()), Some(0.004));
        assert_eq!(quote.unwrap().source, "static");
    }

    #[tokio::test]
    async fn test_resolve_rate_failure_is_unavailable() {
        let (state, quote) = resolve_rate(&StaticSource(None)).await;
        assert_eq!(state, RateState::Unavailable);
        assert!(quote.is_none());
    }

    #[tokio::test]
    async fn test_resolve_rate_invalid_value_is_unavailable() {
        let (state, _) = resolve_rate(&StaticSource(Some(0.0))).await;
        assert_eq!(state, RateState::Unavailable);
    }
}
