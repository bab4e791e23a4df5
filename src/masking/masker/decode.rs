//! Decoding of caller-supplied entity lists
//!
//! Entities reach the masker either as a JSON array or as a string holding a
//! serialized JSON array. An entity that lacks `type`, `value`, `start` or
//! `end` fails the whole decode; nothing is skipped.

use crate::domain::MaskError;
use crate::masking::models::{PiiEntity, PiiType};
use serde_json::{Map, Value};

/// Decode an entity list from a JSON array or a serialized JSON array
pub fn decode_entities(input: &Value) -> Result<Vec<PiiEntity>, MaskError> {
    match input {
        Value::Array(items) => decode_items(items),
        Value::String(serialized) => {
            let parsed: Value = serde_json::from_str(serialized)
                .map_err(|e| MaskError::Unparseable(e.to_string()))?;
            match parsed {
                Value::Array(items) => decode_items(&items),
                other => Err(MaskError::Unparseable(format!(
                    "expected a JSON array of entities, got {}",
                    json_kind(&other)
                ))),
            }
        }
        other => Err(MaskError::Unparseable(format!(
            "expected a JSON array of entities or a string, got {}",
            json_kind(other)
        ))),
    }
}

/// Decode an entity list from serialized JSON text
pub fn decode_entities_str(serialized: &str) -> Result<Vec<PiiEntity>, MaskError> {
    decode_entities(&Value::String(serialized.to_string()))
}

fn decode_items(items: &[Value]) -> Result<Vec<PiiEntity>, MaskError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => decode_entity(index, fields),
            other => Err(MaskError::Unparseable(format!(
                "entity #{index} is {}, not an object",
                json_kind(other)
            ))),
        })
        .collect()
}

fn decode_entity(index: usize, fields: &Map<String, Value>) -> Result<PiiEntity, MaskError> {
    let missing = |field: &'static str| MaskError::MissingField { index, field };

    let pii_type = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("type"))?;
    let value = fields
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("value"))?;
    let start = fields
        .get("start")
        .and_then(Value::as_u64)
        .ok_or_else(|| missing("start"))?;
    let end = fields
        .get("end")
        .and_then(Value::as_u64)
        .ok_or_else(|| missing("end"))?;

    Ok(PiiEntity::new(
        PiiType::from_name(pii_type),
        value,
        usize::try_from(start).map_err(|_| missing("start"))?,
        usize::try_from(end).map_err(|_| missing("end"))?,
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_array() {
        let entities = decode_entities(&json!([
            {"type": "mobile-phone", "value": "010-1234-5678", "start": 0, "end": 13}
        ]))
        .unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].pii_type, PiiType::MobilePhone);
        assert_eq!(entities[0].end, 13);
    }

    #[test]
    fn test_decode_serialized_string() {
        let entities = decode_entities_str(
            r#"[{"type": "이메일", "value": "a@b.co", "start": 2, "end": 8}]"#,
        )
        .unwrap();
        assert_eq!(entities[0].pii_type, PiiType::Email);
        assert_eq!(entities[0].start, 2);
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode_entities_str("[]").unwrap().is_empty());
        assert!(decode_entities(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_unparseable() {
        let err = decode_entities_str("[{not json").unwrap_err();
        assert!(matches!(err, MaskError::Unparseable(_)));
    }

    #[test]
    fn test_non_array_is_unparseable() {
        assert!(matches!(
            decode_entities_str(r#"{"type": "email"}"#),
            Err(MaskError::Unparseable(_))
        ));
        assert!(matches!(
            decode_entities(&json!(42)),
            Err(MaskError::Unparseable(_))
        ));
        assert!(matches!(
            decode_entities(&json!(["oops"])),
            Err(MaskError::Unparseable(_))
        ));
    }

    #[test]
    fn test_missing_field_fails_whole_list() {
        let err = decode_entities(&json!([
            {"type": "email", "value": "a@b.co", "start": 0, "end": 6},
            {"type": "email", "value": "c@d.co", "start": 7}
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            MaskError::MissingField {
                index: 1,
                field: "end"
            }
        );
    }

    #[test]
    fn test_wrongly_typed_field_is_reported() {
        let err = decode_entities(&json!([
            {"type": "email", "value": "a@b.co", "start": "0", "end": 6}
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            MaskError::MissingField {
                index: 0,
                field: "start"
            }
        );
    }
}
