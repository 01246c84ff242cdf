//! Scale applied to the raw Won amount before conversion

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::error::ConversionError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitMultiplier {
    #[serde(alias = "unidades")]
    Units,
    #[serde(alias = "mil")]
    Thousands,
    #[serde(alias = "milhoes", alias = "milhões")]
    Millions,
    #[serde(alias = "bilhoes", alias = "bilhões")]
    #[default]
    Billions,
}

impl UnitMultiplier {
    /// Every selectable unit, largest first, in the order the selector lists them.
    pub const ALL: [UnitMultiplier; 4] = [
        UnitMultiplier::Billions,
        UnitMultiplier::Millions,
        UnitMultiplier::Thousands,
        UnitMultiplier::Units,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            UnitMultiplier::Units => 1.0,
            UnitMultiplier::Thousands => 1_000.0,
            UnitMultiplier::Millions => 1_000_000.0,
            UnitMultiplier::Billions => 1_000_000_000.0,
        }
    }

    /// Label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            UnitMultiplier::Units => "Unidades",
            UnitMultiplier::Thousands => "Mil",
            UnitMultiplier::Millions => "Milhões",
            UnitMultiplier::Billions => "Bilhões",
        }
    }
}

impl Display for UnitMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for UnitMultiplier {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('õ', "o").replace('_', "");
        match normalized.as_str() {
            "1" | "units" | "unidades" => Ok(UnitMultiplier::Units),
            "1000" | "thousands" | "mil" => Ok(UnitMultiplier::Thousands),
            "1000000" | "millions" | "milhoes" => Ok(UnitMultiplier::Millions),
            "1000000000" | "billions" | "bilhoes" => Ok(UnitMultiplier::Billions),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}
