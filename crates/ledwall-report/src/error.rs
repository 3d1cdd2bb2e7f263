//! Error types for the report crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error while writing the rendered document.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
