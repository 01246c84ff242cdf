use super::ui;
use crate::core::format::FormattedAmount;
use crate::core::rate::{RateSource, resolve_rate};
use crate::core::session::Converter;
use crate::core::unit::UnitMultiplier;

/// Converts a single amount and prints the result. Prints nothing when the
/// amount is invalid or the rate could not be obtained.
pub async fn run(
    source: &dyn RateSource,
    raw_amount: &str,
    unit: UnitMultiplier,
) -> Option<FormattedAmount> {
    let (state, _) = ui::with_spinner("Buscando cotação...", resolve_rate(source)).await;

    let mut converter = Converter::new(unit);
    converter.resolve_rate(state);
    converter.set_amount(raw_amount);

    let display = converter.display();
    if let Some(formatted) = &display {
        println!("{}", ui::result_line(formatted));
    }
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rate::ExchangeRate;
    use crate::providers::fixed::FixedRateSource;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl RateSource for FailingSource {
        async fn fetch_rate(&self) -> anyhow::Result<crate::core::rate::RateQuote> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_convert_with_fixed_rate() {
        let source = FixedRateSource::new(ExchangeRate::FIXED);
        let result = run(&source, "1", UnitMultiplier::Billions).await;
        assert_eq!(result.unwrap().to_string(), "3,80 milhões");
    }

    #[tokio::test]
    async fn test_convert_with_failed_rate_is_absent() {
        let result = run(&FailingSource, "1", UnitMultiplier::Billions).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_convert_invalid_amount_is_absent() {
        let source = FixedRateSource::default();
        assert!(run(&source, "abc", UnitMultiplier::Units).await.is_none());
    }
}
