//! Unit conversion for physical wall dimensions.
//!
//! The engine does all arithmetic in meters; inputs arrive in one of a
//! fixed set of units, each carrying a fixed multiplicative factor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SizingError;

/// Supported input units for physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meters (factor 1)
    Meters,
    /// Millimeters (factor 0.001)
    Millimeters,
    /// Inches (factor 0.0254)
    Inches,
    /// Feet (factor 0.3048)
    Feet,
}

impl LengthUnit {
    /// Multiplicative factor from this unit to meters.
    pub fn factor_to_meters(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Millimeters => 0.001,
            Self::Inches => 0.0254,
            Self::Feet => 0.3048,
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Millimeters => "mm",
            Self::Inches => "in",
            Self::Feet => "ft",
        }
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "meters"),
            Self::Millimeters => write!(f, "millimeters"),
            Self::Inches => write!(f, "inches"),
            Self::Feet => write!(f, "feet"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meters" | "meter" | "m" => Ok(Self::Meters),
            "millimeters" | "millimeter" | "mm" => Ok(Self::Millimeters),
            "inches" | "inch" | "in" => Ok(Self::Inches),
            "feet" | "foot" | "ft" => Ok(Self::Feet),
            _ => Err(SizingError::InvalidUnit(s.to_string())),
        }
    }
}

/// Convert a physical quantity to meters.
///
/// Zero is accepted and yields zero downstream metrics. Negative or
/// non-finite values are rejected.
pub fn to_meters(value: f64, unit: LengthUnit) -> crate::error::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SizingError::degenerate("length", value));
    }
    Ok(value * unit.factor_to_meters())
}
