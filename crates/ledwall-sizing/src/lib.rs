//! # LedWall Sizing Engine
//!
//! Pure sizing calculations for LED video walls: unit conversion,
//! rectangular pixel/cabinet/power/weight metrics, aspect-ratio reduction,
//! and arc cabinet counts for curved arrangements.
//!
//! The engine holds no state and performs no I/O. Callers supply a
//! [`SizingRequest`] and a read-only panel catalog and get back a complete
//! [`SizingResult`] or a single typed error; there are no partial results.
//! Every operation is closed-form arithmetic, so calculations may run fully
//! in parallel without coordination.

pub mod aspect;
pub mod engine;
pub mod error;
pub mod types;
pub mod units;

pub use aspect::{AspectFormat, AspectRatio};
pub use engine::{arc_cabinet_count, calculate, rectangular};
pub use error::{Result, SizingError};
pub use types::{ArcParameters, SizingRequest, SizingResult};
pub use units::{to_meters, LengthUnit};
