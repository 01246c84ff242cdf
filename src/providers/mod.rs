pub mod exchangerate_api;
pub mod fixed;

use crate::core::config::{AppConfig, RateMode};
use crate::core::rate::RateSource;
use exchangerate_api::ExchangeRateApiProvider;
use fixed::FixedRateSource;
use tracing::debug;

/// Builds the rate source selected by `mode`.
pub fn build_rate_source(config: &AppConfig, mode: RateMode) -> Box<dyn RateSource> {
    match mode {
        RateMode::Fixed => {
            debug!(rate = %config.rate.fixed, "Using fixed exchange rate");
            Box::new(FixedRateSource::new(config.rate.fixed))
        }
        RateMode::Live => {
            let api = &config.providers.exchangerate;
            debug!(base_url = %api.base_url, "Using live exchange rate");
            Box::new(ExchangeRateApiProvider::new(
                &api.base_url,
                api.resolve_api_key(),
            ))
        }
    }
}
