//! OCR result boundary
//!
//! Text recognition itself happens upstream. This module reads the JSON an
//! OCR step produces, either
//!
//! ```json
//! { "full_text": "...", "details": [{ "text": "...", "confidence": 0.98, "bbox": [[0, 0], ...] }] }
//! ```
//!
//! or an error object `{ "error": "..." }`, and turns it into the text the
//! detector scans.

use crate::domain::{DocmaskError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recognized text fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrToken {
    /// Recognized text
    pub text: String,

    /// Recognition confidence (0.0-1.0)
    #[serde(default)]
    pub confidence: f64,

    /// Polygon corners in image pixels
    #[serde(default)]
    pub bbox: Vec<[i64; 2]>,
}

/// Successful OCR result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Assembled page text, if the OCR step provided it
    #[serde(default)]
    pub full_text: Option<String>,

    /// Individual fragments in reading order
    #[serde(default)]
    pub details: Vec<OcrToken>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOcrResponse {
    Failed { error: String },
    Output(OcrOutput),
}

impl OcrOutput {
    /// Parse an OCR response
    ///
    /// # Errors
    ///
    /// Returns [`DocmaskError::Ocr`] for an `{ error }` response and
    /// [`DocmaskError::Serialization`] for anything that is not an OCR response.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<RawOcrResponse>(json)? {
            RawOcrResponse::Failed { error } => Err(DocmaskError::Ocr(error)),
            RawOcrResponse::Output(output) => Ok(output),
        }
    }

    /// Page text: `full_text` when present, otherwise the fragments joined
    /// with single spaces
    pub fn text(&self) -> String {
        match self.full_text {
            Some(ref text) => text.clone(),
            None => self
                .details
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Mean confidence over all fragments, if there are any
    pub fn mean_confidence(&self) -> Option<f64> {
        if self.details.is_empty() {
            return None;
        }
        let sum: f64 = self.details.iter().map(|t| t.confidence).sum();
        Some(sum / self.details.len() as f64)
    }
}

/// Read the text of one input document
///
/// With `ocr_json` set the file is parsed as an OCR response; otherwise its
/// contents are taken as text.
pub async fn load_document_text(path: &Path, ocr_json: bool) -> Result<String> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        DocmaskError::Io(format!("Failed to read {}: {e}", path.display()))
    })?;
    document_text(&content, ocr_json)
}

/// Text of an already-read input, see [`load_document_text`]
pub fn document_text(content: &str, ocr_json: bool) -> Result<String> {
    if !ocr_json {
        return Ok(content.to_string());
    }

    let output = OcrOutput::from_json(content)?;
    tracing::debug!(
        fragments = output.details.len(),
        mean_confidence = output.mean_confidence().unwrap_or_default(),
        "Parsed OCR output"
    );
    Ok(output.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_preferred() {
        let output = OcrOutput::from_json(
            r#"{"full_text": "연락처는 010-1234-5678", "details": [{"text": "무시", "confidence": 0.5, "bbox": []}]}"#,
        )
        .unwrap();
        assert_eq!(output.text(), "연락처는 010-1234-5678");
    }

    #[test]
    fn test_text_assembled_from_details() {
        let output = OcrOutput::from_json(
            r#"{"details": [
                {"text": "연락처는", "confidence": 0.91, "bbox": [[0, 0], [40, 0], [40, 12], [0, 12]]},
                {"text": "010-1234-5678", "confidence": 0.99, "bbox": [[44, 0], [120, 0], [120, 12], [44, 12]]}
            ]}"#,
        )
        .unwrap();
        assert!(output.full_text.is_none());
        assert_eq!(output.text(), "연락처는 010-1234-5678");
        assert_eq!(output.details[1].bbox[1], [120, 0]);
    }

    #[test]
    fn test_error_object() {
        let err = OcrOutput::from_json(r#"{"error": "파일을 찾을 수 없습니다: /tmp/x.png"}"#)
            .unwrap_err();
        assert!(matches!(err, DocmaskError::Ocr(ref msg) if msg.contains("/tmp/x.png")));
    }

    #[test]
    fn test_not_json() {
        let err = OcrOutput::from_json("plain text").unwrap_err();
        assert!(matches!(err, DocmaskError::Serialization(_)));
    }

    #[test]
    fn test_empty_output() {
        let output = OcrOutput::from_json("{}").unwrap();
        assert_eq!(output.text(), "");
        assert!(output.mean_confidence().is_none());
    }

    #[test]
    fn test_plain_document_text() {
        assert_eq!(document_text("{\"a\": 1}", false).unwrap(), "{\"a\": 1}");
    }

    #[tokio::test]
    async fn test_load_document_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        std::fs::write(&path, r#"{"full_text": "test@example.com"}"#).unwrap();

        let text = load_document_text(&path, true).await.unwrap();
        assert_eq!(text, "test@example.com");

        let missing = load_document_text(&dir.path().join("none.json"), true).await;
        assert!(matches!(missing, Err(DocmaskError::Io(_))));
    }
}
