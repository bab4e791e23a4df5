//! Domain error types
//!
//! This module defines the error hierarchy for docmask. Library-facing
//! errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main docmask error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DocmaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream OCR output could not be used
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Masking input could not be interpreted
    #[error("Masking error: {0}")]
    Mask(#[from] MaskError),

    /// Pattern library could not be loaded or compiled
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Masker input errors
///
/// Raised when the entity collection handed to the masker cannot be used.
/// The whole masking call fails; no entity is skipped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The serialized entity list is not valid JSON, or not a list
    #[error("failed to parse pii entities: {0}")]
    Unparseable(String),

    /// An entity lacks a required field or carries a wrongly-typed one
    #[error("entity #{index} is missing or has an invalid '{field}' field")]
    MissingField { index: usize, field: &'static str },

    /// An entity span does not fit the text
    #[error("entity #{index} has invalid span [{start}, {end}) for text of length {len}")]
    InvalidSpan {
        index: usize,
        start: usize,
        end: usize,
        len: usize,
    },
}

// Conversion from std::io::Error
impl From<std::io::Error> for DocmaskError {
    fn from(err: std::io::Error) -> Self {
        DocmaskError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DocmaskError {
    fn from(err: serde_json::Error) -> Self {
        DocmaskError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DocmaskError {
    fn from(err: toml::de::Error) -> Self {
        DocmaskError::Configuration(format!("TOML parse error: {err}"))
    }
}
