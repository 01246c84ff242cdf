//! Conversion core: units, rates, formatting and session state

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod log;
pub mod rate;
pub mod session;
pub mod unit;

// Re-export main types for cleaner imports
pub use engine::{convert, try_convert};
pub use error::ConversionError;
pub use format::{FormattedAmount, Tier, format_real};
pub use rate::{ExchangeRate, RateQuote, RateSource, RateState, resolve_rate};
pub use session::Converter;
pub use unit::UnitMultiplier;
