//! Error types for the conversion core

use thiserror::Error;

/// Reasons a conversion produces no displayable value.
///
/// `EmptyAmount` and `InvalidAmount` are parse failures of the raw input,
/// `RateUnavailable` covers a pending or failed rate fetch. All of them end
/// up as an empty display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("amount is empty")]
    EmptyAmount,
    #[error("amount is not a finite number: {0:?}")]
    InvalidAmount(String),
    #[error("exchange rate is not available")]
    RateUnavailable,
    #[error("exchange rate must be a positive finite number, got {0}")]
    InvalidRate(f64),
    #[error("unknown unit: {0:?} (expected units, thousands, millions or billions)")]
    UnknownUnit(String),
}
