//! JSON tool interface
//!
//! The two operations an external orchestrator calls:
//!
//! - `detect_pii(text)` returns `{ pii_count, entities: [{type, value, start, end}] }`
//! - `mask_pii(text, pii_entities)` returns `{ masked_text, masked_count, details }`,
//!   or `{ error }` when the entity list cannot be decoded
//!
//! ```rust
//! use docmask::masking::tools::PiiTools;
//!
//! # fn example() -> anyhow::Result<()> {
//! let tools = PiiTools::new()?;
//! let detection = tools.detect_pii("test@example.com");
//! let entities = serde_json::to_value(&detection.entities)?;
//! let response = tools.mask_pii("test@example.com", &entities);
//! assert_eq!(response.to_json()?, r#"{"masked_text":"****@****","masked_count":1,"details":[{"type":"email","original":"test@example.com","masked":"****@****"}]}"#);
//! # Ok(())
//! # }
//! ```

use crate::masking::detector::patterns::PatternRegistry;
use crate::masking::detector::regex::RegexDetector;
use crate::masking::detector::PiiDetector;
use crate::masking::masker::{decode_entities, MaskTable, Masker};
use crate::masking::models::{DetectionResult, MaskResult};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Response of `mask_pii`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MaskPiiResponse {
    /// Masking succeeded
    Masked(MaskResult),
    /// The entity list could not be interpreted
    Error {
        /// Human-readable reason
        error: String,
    },
}

impl MaskPiiResponse {
    /// Check if this response carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Serialize as compact JSON; non-ASCII text is kept verbatim
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Detector and masker exposed as JSON-in, JSON-out operations
#[derive(Clone)]
pub struct PiiTools {
    detector: Arc<dyn PiiDetector>,
    masker: Masker,
}

impl PiiTools {
    /// Tools backed by the built-in catalogue and token table
    pub fn new() -> Result<Self> {
        Ok(Self::from_registry(PatternRegistry::default_patterns()?))
    }

    /// Tools backed by a (possibly extended) pattern registry
    pub fn from_registry(registry: PatternRegistry) -> Self {
        let masker = Masker::with_table(MaskTable::from_registry(&registry));
        Self {
            detector: Arc::new(RegexDetector::with_registry(registry)),
            masker,
        }
    }

    /// Tools from explicit parts
    pub fn with_parts(detector: Arc<dyn PiiDetector>, masker: Masker) -> Self {
        Self { detector, masker }
    }

    /// Detector behind `detect_pii`
    pub fn detector(&self) -> &Arc<dyn PiiDetector> {
        &self.detector
    }

    /// Masker behind `mask_pii`
    pub fn masker(&self) -> &Masker {
        &self.masker
    }

    /// Detect PII in `text`
    pub fn detect_pii(&self, text: &str) -> DetectionResult {
        self.detector.detect(text)
    }

    /// Detect PII in `text` and serialize the result
    pub fn detect_pii_json(&self, text: &str) -> serde_json::Result<String> {
        serde_json::to_string(&self.detect_pii(text))
    }

    /// Mask `pii_entities` in `text`.
    ///
    /// `pii_entities` is either a JSON array of entities or a string holding one.
    /// Decoding and span errors are reported as `{ error }`, never as an
    /// unchanged text.
    pub fn mask_pii(&self, text: &str, pii_entities: &Value) -> MaskPiiResponse {
        let outcome = decode_entities(pii_entities)
            .and_then(|entities| self.masker.mask(text, &entities));

        match outcome {
            Ok(result) => MaskPiiResponse::Masked(result),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected masking request");
                MaskPiiResponse::Error {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_pii_shape() {
        let tools = PiiTools::new().unwrap();
        let value = serde_json::to_value(tools.detect_pii("test@example.com")).unwrap();
        assert_eq!(
            value,
            json!({
                "pii_count": 1,
                "entities": [{"type": "email", "value": "test@example.com", "start": 0, "end": 16}]
            })
        );
    }

    #[test]
    fn test_detect_pii_json_keeps_korean() {
        let tools = PiiTools::new().unwrap();
        let json = tools.detect_pii_json("전화 010-1234-5678").unwrap();
        assert!(json.contains("\"mobile-phone\""));
        assert!(json.contains("\"start\":3"));
    }

    #[test]
    fn test_mask_pii_accepts_serialized_string() {
        let tools = PiiTools::new().unwrap();
        let entities = json!(
            r#"[{"type": "mobile-phone", "value": "010-1234-5678", "start": 5, "end": 18}]"#
        );
        let response = tools.mask_pii("연락처는 010-1234-5678 입니다", &entities);

        match response {
            MaskPiiResponse::Masked(result) => {
                assert_eq!(result.masked_text, "연락처는 ***-****-**** 입니다");
                assert_eq!(result.masked_count, 1);
            }
            MaskPiiResponse::Error { error } => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn test_mask_pii_invalid_json_is_error_object() {
        let tools = PiiTools::new().unwrap();
        let response = tools.mask_pii("010-1234-5678", &json!("[{broken"));
        assert!(response.is_error());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("error").and_then(Value::as_str).is_some());
        assert!(value.get("masked_text").is_none());
    }

    #[test]
    fn test_mask_pii_empty_list() {
        let tools = PiiTools::new().unwrap();
        let response = tools.mask_pii("plain text", &json!([]));
        assert_eq!(
            response,
            MaskPiiResponse::Masked(MaskResult::unchanged("plain text"))
        );
    }

    #[test]
    fn test_library_tokens_reach_masker() {
        let registry = PatternRegistry::from_toml(
            r#"
[[patterns]]
type = "employee-id"
pattern = 'EMP-\d{6}'
mask = "EMP-******"
"#,
        )
        .unwrap();
        let tools = PiiTools::from_registry(registry);

        let text = "사번 EMP-123456";
        let detection = tools.detect_pii(text);
        let entities = serde_json::to_value(&detection.entities).unwrap();
        let MaskPiiResponse::Masked(result) = tools.mask_pii(text, &entities) else {
            panic!("masking failed");
        };
        assert_eq!(result.masked_text, "사번 EMP-******");
    }
}
