//! Holds the inputs of a conversion session and recomputes the display on demand

use tracing::{debug, warn};

use super::engine;
use super::format::FormattedAmount;
use super::rate::{ExchangeRate, RateState};
use super::unit::UnitMultiplier;

#[derive(Debug, Clone, Default)]
pub struct Converter {
    raw_amount: String,
    unit: UnitMultiplier,
    rate: RateState,
}

impl Converter {
    /// A converter whose rate is still being fetched.
    pub fn new(unit: UnitMultiplier) -> Self {
        Converter {
            raw_amount: String::new(),
            unit,
            rate: RateState::Pending,
        }
    }

    pub fn with_rate(unit: UnitMultiplier, rate: ExchangeRate) -> Self {
        Converter {
            raw_amount: String::new(),
            unit,
            rate: RateState::Available(rate),
        }
    }

    pub fn set_amount(&mut self, raw_amount: impl Into<String>) {
        self.raw_amount = raw_amount.into();
        debug!(raw_amount = %self.raw_amount, "Amount changed");
    }

    pub fn set_unit(&mut self, unit: UnitMultiplier) {
        self.unit = unit;
        debug!(%unit, "Unit changed");
    }

    /// Stores the outcome of the rate fetch. The rate is written once: returns
    /// `false` and leaves the state untouched unless it is still pending.
    pub fn resolve_rate(&mut self, state: RateState) -> bool {
        if !self.rate.is_pending() {
            warn!(current = ?self.rate, ignored = ?state, "Exchange rate already resolved");
            return false;
        }
        self.rate = state;
        true
    }

    pub fn raw_amount(&self) -> &str {
        &self.raw_amount
    }

    pub fn unit(&self) -> UnitMultiplier {
        self.unit
    }

    pub fn rate(&self) -> RateState {
        self.rate
    }

    pub fn display(&self) -> Option<FormattedAmount> {
        engine::convert(&self.raw_amount, self.unit, self.rate.rate())
    }
}
