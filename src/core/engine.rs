//! Won to Real conversion

use tracing::debug;

use super::error::ConversionError;
use super::format::{FormattedAmount, format_real};
use super::rate::ExchangeRate;
use super::unit::UnitMultiplier;

/// Parses the raw input into a finite Won amount.
pub fn parse_amount(raw_amount: &str) -> Result<f64, ConversionError> {
    let trimmed = raw_amount.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyAmount);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidAmount(raw_amount.to_string())),
    }
}

/// Converts `raw_amount` scaled by `unit` into Real at `rate`.
///
/// The amount is validated before the rate, so an empty input reports
/// `EmptyAmount` even while the rate is still pending.
pub fn try_convert(
    raw_amount: &str,
    unit: UnitMultiplier,
    rate: Option<ExchangeRate>,
) -> Result<FormattedAmount, ConversionError> {
    let amount = parse_amount(raw_amount)?;
    let rate = rate.ok_or(ConversionError::RateUnavailable)?;

    let won_total = amount * unit.factor();
    let real_value = won_total * rate.value();
    if !real_value.is_finite() {
        return Err(ConversionError::InvalidAmount(raw_amount.to_string()));
    }

    Ok(format_real(real_value))
}

/// Same as [`try_convert`], with every failure collapsed into `None`.
pub fn convert(
    raw_amount: &str,
    unit: UnitMultiplier,
    rate: Option<ExchangeRate>,
) -> Option<FormattedAmount> {
    match try_convert(raw_amount, unit, rate) {
        Ok(formatted) => Some(formatted),
        Err(reason) => {
            debug!(%reason, "Nothing to display");
            None
        }
    }
}
