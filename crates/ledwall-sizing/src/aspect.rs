//! Aspect ratio computation.
//!
//! Two forms exist in the domain: the reduced integer ratio of the pixel
//! dimensions and the decimal ratio of the physical dimensions. A request
//! selects one explicitly; the engine never switches formats on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which form of aspect ratio a request wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectFormat {
    /// Reduced integer ratio of the pixel dimensions, e.g. `16:9`.
    Reduced,
    /// Decimal ratio of the physical dimensions, rounded to two places.
    Decimal,
}

impl Default for AspectFormat {
    fn default() -> Self {
        Self::Reduced
    }
}

/// Aspect ratio of a sized wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// Reduced integer ratio of the total pixel dimensions.
    Reduced { width: u32, height: u32 },
    /// Physical width/height ratio rounded to two decimal places.
    Decimal(f64),
    /// Either pixel dimension is zero; no meaningful ratio exists.
    Undefined,
}

impl AspectRatio {
    /// Reduce the two pixel totals by their greatest common divisor.
    ///
    /// Returns `Undefined` when either dimension is zero rather than
    /// dividing by it.
    pub fn reduced(width_px: u32, height_px: u32) -> Self {
        if width_px == 0 || height_px == 0 {
            return Self::Undefined;
        }
        let divisor = gcd(width_px, height_px);
        Self::Reduced {
            width: width_px / divisor,
            height: height_px / divisor,
        }
    }

    /// Decimal ratio of the physical dimensions, rounded to two places.
    pub fn decimal(width_m: f64, height_m: f64) -> Self {
        if width_m <= 0.0 || height_m <= 0.0 {
            return Self::Undefined;
        }
        Self::Decimal((width_m / height_m * 100.0).round() / 100.0)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduced { width, height } => write!(f, "{}:{}", width, height),
            Self::Decimal(ratio) => write!(f, "{:.2}", ratio),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
