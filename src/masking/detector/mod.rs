//! PII detection module
//!
//! Provides the trait-based detection interface and the regex implementation
//! used to locate PII in a flat text buffer.

pub mod patterns;
pub mod regex;

use crate::masking::models::{DetectionResult, PiiType};

/// Trait for PII detection implementations
///
/// Detection is a pure function of the input text: it never fails and never
/// depends on previous calls.
pub trait PiiDetector: Send + Sync {
    /// Detect PII in a text buffer
    fn detect(&self, text: &str) -> DetectionResult;

    /// Categories this detector can report, in precedence order
    fn supported_types(&self) -> Vec<PiiType>;
}
