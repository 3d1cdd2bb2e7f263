//! Error types for the sizing engine.
//!
//! Every error is a local validation failure detected before any arithmetic
//! that would divide by zero or produce a meaningless result. Errors are
//! never retried or recovered internally; they propagate to the caller as
//! the outcome of the calculation.

use ledwall_paneldb::PanelDbError;
use thiserror::Error;

/// Errors that can occur during a sizing calculation.
#[derive(Error, Debug)]
pub enum SizingError {
    /// The requested model is not present in the catalog, or the supplied
    /// model record is invalid.
    #[error(transparent)]
    Panel(#[from] PanelDbError),

    /// The unit is not in the supported set.
    #[error("Unknown unit: {0}")]
    InvalidUnit(String),

    /// A required dimension is zero or negative where a positive value is
    /// required, or is not a finite number.
    #[error("Degenerate dimension '{dimension}': {value}")]
    DegenerateDimension { dimension: String, value: f64 },

    /// Arc degrees outside the range (0, 360].
    #[error("Invalid arc angle: {degrees} (valid: 0 < degrees <= 360)")]
    InvalidArcAngle { degrees: f64 },
}

impl SizingError {
    /// Create a degenerate-dimension error for a named input.
    pub fn degenerate(dimension: impl Into<String>, value: f64) -> Self {
        Self::DegenerateDimension {
            dimension: dimension.into(),
            value,
        }
    }
}

/// Result type alias for sizing operations.
pub type Result<T> = std::result::Result<T, SizingError>;
