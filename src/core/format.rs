//! Magnitude tiers and pt-BR style display of Real amounts

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Tier {
    Units,
    Thousands,
    Millions,
    Billions,
}

impl Tier {
    /// Tiers from largest to smallest, the order in which bounds are checked.
    const DESCENDING: [Tier; 4] = [Tier::Billions, Tier::Millions, Tier::Thousands, Tier::Units];

    /// Inclusive lower bound of the tier.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Tier::Units => 0.0,
            Tier::Thousands => 1e3,
            Tier::Millions => 1e6,
            Tier::Billions => 1e9,
        }
    }

    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Tier::Units => None,
            Tier::Thousands => Some("mil"),
            Tier::Millions => Some("milhões"),
            Tier::Billions => Some("bilhões"),
        }
    }

    /// Picks the tier by absolute magnitude so negative amounts keep their scale.
    pub fn for_value(value: f64) -> Tier {
        let magnitude = value.abs();
        Tier::DESCENDING
            .into_iter()
            .find(|tier| magnitude >= tier.lower_bound())
            .unwrap_or(Tier::Units)
    }

    fn divisor(&self) -> f64 {
        match self {
            Tier::Units => 1.0,
            tier => tier.lower_bound(),
        }
    }
}

/// A Real value ready for display, e.g. `3,80 milhões`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedAmount {
    real_value: f64,
    tier: Tier,
}

impl FormattedAmount {
    /// The unscaled value in Real.
    pub fn real_value(&self) -> f64 {
        self.real_value
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The value divided down to its tier, the number that gets printed.
    pub fn scaled(&self) -> f64 {
        self.real_value / self.tier.divisor()
    }
}

/// Two decimals, with exact ties rounded away from zero instead of to even.
/// Only values whose binary representation is exactly `k + 0.005` count as
/// ties; `1.115` is stored below the midpoint and still prints `1.11`.
fn two_decimals(value: f64) -> String {
    // -0.0 prints as 0.00
    let value = if value == 0.0 { 0.0 } else { value };
    let doubled = (value * 200.0).round();
    let is_tie = value.abs() < 1e15
        && doubled % 2.0 != 0.0
        && value.mul_add(200.0, -doubled) == 0.0;
    if is_tie {
        let cents = (doubled.abs() as u64).div_ceil(2);
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{value:.2}")
    }
}

impl Display for FormattedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = two_decimals(self.scaled()).replace('.', ",");
        match self.tier.suffix() {
            Some(suffix) => write!(f, "{digits} {suffix}"),
            None => write!(f, "{digits}"),
        }
    }
}

pub fn format_real(real_value: f64) -> FormattedAmount {
    FormattedAmount {
        real_value,
        tier: Tier::for_value(real_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_each_tier() {
        assert_eq!(format_real(3.8).to_string(), "3,80");
        assert_eq!(format_real(3_800.0).to_string(), "3,80 mil");
        assert_eq!(format_real(3_800_000.0).to_string(), "3,80 milhões");
        assert_eq!(format_real(3_800_000_000.0).to_string(), "3,80 bilhões");
        assert_eq!(format_real(3_800_000_000_000.0).to_string(), "3800,00 bilhões");
    }

    #[test]
    fn test_lower_bounds_are_inclusive() {
        assert_eq!(format_real(1_000.0).to_string(), "1,00 mil");
        assert_eq!(format_real(1_000_000.0).to_string(), "1,00 milhões");
        assert_eq!(format_real(1_000_000_000.0).to_string(), "1,00 bilhões");
        assert_eq!(format_real(999.0).to_string(), "999,00");
    }

    #[test]
    fn test_tier_selection_is_monotonic() {
        let values = [
            0.0,
            0.5,
            999.99,
            1_000.0,
            1_000.01,
            999_999.99,
            1_000_000.0,
            999_999_999.0,
            1_000_000_000.0,
            5e12,
        ];
        let tiers: Vec<Tier> = values.iter().map(|v| Tier::for_value(*v)).collect();
        for pair in tiers.windows(2) {
            assert!(pair[0] <= pair[1], "tier went down: {pair:?}");
            // Neighbouring values never skip a tier.
            assert!((pair[1] as u8) - (pair[0] as u8) <= 1, "tier skipped: {pair:?}");
        }
        assert_eq!(tiers.first(), Some(&Tier::Units));
        assert_eq!(tiers.last(), Some(&Tier::Billions));
    }

    #[test]
    fn test_crossing_a_boundary_changes_suffix() {
        assert_ne!(
            format_real(999.99).tier().suffix(),
            format_real(1_000.0).tier().suffix()
        );
        assert_ne!(
            format_real(999_999.0).tier().suffix(),
            format_real(1_000_000.0).tier().suffix()
        );
    }

    #[test]
    fn test_negative_values_use_absolute_magnitude() {
        assert_eq!(format_real(-3_800_000.0).to_string(), "-3,80 milhões");
        assert_eq!(format_real(-12.5).to_string(), "-12,50");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_real(0.125).to_string(), "0,13");
        assert_eq!(format_real(1125.0).to_string(), "1,13 mil");
        assert_eq!(format_real(2.375).to_string(), "2,38");
        assert_eq!(format_real(-0.125).to_string(), "-0,13");
    }

    #[test]
    fn test_values_near_a_tie_keep_nearest_rounding() {
        // 1.115 is stored as 1.11499999...
        assert_eq!(format_real(1.115).to_string(), "1,11");
        assert_eq!(format_real(0.5).to_string(), "0,50");
        assert_eq!(format_real(2.675).to_string(), "2,67");
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        assert_eq!(format_real(-0.0).to_string(), "0,00");
    }

    #[test]
    fn test_scaled_and_real_value() {
        let formatted = format_real(2_500_000.0);
        assert_eq!(formatted.real_value(), 2_500_000.0);
        assert_eq!(formatted.scaled(), 2.5);
        assert_eq!(formatted.tier(), Tier::Millions);
    }
}
