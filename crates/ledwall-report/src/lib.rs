//! # LedWall Report
//!
//! Serializes a sizing request/result pair into a paginated, printable
//! plain-text document. Every field is treated as an opaque labeled value;
//! nothing is recomputed here.

pub mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
pub use report::SizingReport;
