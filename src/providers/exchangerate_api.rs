use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::rate::{BASE_CURRENCY, ExchangeRate, RateQuote, RateSource, TARGET_CURRENCY};

// ExchangeRateApiProvider implementation for RateSource
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    time_last_update_unix: Option<i64>,
}

#[async_trait]
impl RateSource for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateApiFetch",
        skip(self),
        fields(base_url = %self.base_url)
    )]
    async fn fetch_rate(&self) -> Result<RateQuote> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("No API key configured for the exchange rate provider"))?;

        // The key is part of the path, keep it out of the logs.
        let url = format!("{}/v6/{}/latest/{}", self.base_url, api_key, BASE_CURRENCY);
        debug!(
            "Requesting {} rates from {}/v6/***/latest/{}",
            BASE_CURRENCY, self.base_url, BASE_CURRENCY
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!("won2real/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Request error: {} for base currency: {}",
                    e.without_url(),
                    BASE_CURRENCY
                )
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<LatestRatesResponse>(&text)
                .ok()
                .and_then(|body| body.error_type);
            return Err(match detail {
                Some(error_type) => anyhow!("HTTP error: {} ({})", status, error_type),
                None => anyhow!("HTTP error: {}", status),
            });
        }

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", BASE_CURRENCY, e))?;

        if data.result != "success" {
            return Err(anyhow!(
                "API error: {}",
                data.error_type.as_deref().unwrap_or(&data.result)
            ));
        }

        let value = data
            .conversion_rates
            .get(TARGET_CURRENCY)
            .copied()
            .ok_or_else(|| {
                anyhow!(
                    "No rate data found for currency pair: {}{}",
                    BASE_CURRENCY,
                    TARGET_CURRENCY
                )
            })?;
        let rate = ExchangeRate::new(value)?;

        let updated_at = data
            .time_last_update_unix
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single());

        Ok(RateQuote {
            rate,
            source: "exchangerate-api".to_string(),
            updated_at,
        })
    }
}
