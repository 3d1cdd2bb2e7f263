//! Error types for the panel database crate.
//!
//! This module provides structured error types for catalog assembly,
//! model file loading, and panel model validation.

use std::io;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Error, Debug)]
pub enum PanelDbError {
    /// The requested panel model is not present in the catalog.
    #[error("Unknown panel model: {0}")]
    UnknownModel(String),

    /// A model with this name is already present in the catalog.
    #[error("Duplicate panel model: {0}")]
    DuplicateModel(String),

    /// The model file extension is not recognized.
    #[error("Unsupported model file format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A model validation error occurred.
    #[error("Validation error: {0}")]
    Validation(#[from] ModelError),
}

/// Errors related to panel model validation.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A required field is missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A numeric value is out of valid range.
    #[error("Value out of range for '{field}': {value}")]
    ValueOutOfRange { field: String, value: String },
}

/// Result type alias for catalog operations.
pub type PanelDbResult<T> = Result<T, PanelDbError>;

/// Result type alias for model validation operations.
pub type ModelResult<T> = Result<T, ModelError>;
