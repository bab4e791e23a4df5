//! Span masking
//!
//! Replaces entity spans with mask tokens. Replacement runs from the highest
//! `start` to the lowest, so a replacement whose token length differs from the
//! original only shifts text after the span being processed, never the spans
//! still waiting to be processed.

pub mod decode;
pub mod table;

pub use decode::{decode_entities, decode_entities_str};
pub use table::MaskTable;

use crate::domain::MaskError;
use crate::masking::models::{MaskDetail, MaskResult, PiiEntity};

/// Back-to-front span masker
#[derive(Debug, Clone, Default)]
pub struct Masker {
    table: MaskTable,
}

impl Masker {
    /// Create a masker with the built-in token table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a masker with a custom token table
    pub fn with_table(table: MaskTable) -> Self {
        Self { table }
    }

    /// Token table used by this masker
    pub fn table(&self) -> &MaskTable {
        &self.table
    }

    /// Mask every entity span in `text`.
    ///
    /// Spans are validated against the original text first; one bad span fails
    /// the whole call. Overlapping spans are masked independently: an entity
    /// processed later (smaller `start`) that reaches into an already-masked
    /// region slices the replaced text, not the original.
    pub fn mask(&self, text: &str, entities: &[PiiEntity]) -> Result<MaskResult, MaskError> {
        if entities.is_empty() {
            return Ok(MaskResult::unchanged(text));
        }

        let mut buffer: Vec<char> = text.chars().collect();
        let len = buffer.len();
        for (index, entity) in entities.iter().enumerate() {
            if entity.start >= entity.end || entity.end > len {
                return Err(MaskError::InvalidSpan {
                    index,
                    start: entity.start,
                    end: entity.end,
                    len,
                });
            }
        }

        let mut ordered: Vec<&PiiEntity> = entities.iter().collect();
        ordered.sort_by(|a, b| b.start.cmp(&a.start));

        let mut details = Vec::with_capacity(ordered.len());
        for entity in ordered {
            let token = self.table.mask_for(entity);

            // The buffer may have shrunk if an overlapping, later span was masked
            // with a shorter token.
            let end = entity.end.min(buffer.len());
            let start = entity.start.min(end);
            buffer.splice(start..end, token.chars());

            details.push(MaskDetail {
                pii_type: entity.pii_type.clone(),
                original: entity.value.clone(),
                masked: token,
            });
        }
        details.reverse();

        tracing::debug!(masked_count = details.len(), "Masking finished");

        Ok(MaskResult {
            masked_text: buffer.into_iter().collect(),
            masked_count: details.len(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::models::PiiType;

    #[test]
    fn test_empty_entities_is_noop() {
        let result = Masker::new().mask("nothing here", &[]).unwrap();
        assert_eq!(result, MaskResult::unchanged("nothing here"));
    }

    #[test]
    fn test_mask_single_mobile_phone() {
        let text = "연락처는 010-1234-5678 입니다";
        let entity = PiiEntity::new(PiiType::MobilePhone, "010-1234-5678", 5, 18);

        let result = Masker::new().mask(text, &[entity]).unwrap();
        assert_eq!(result.masked_text, "연락처는 ***-****-**** 입니다");
        assert_eq!(result.masked_count, 1);
        assert_eq!(result.details[0].original, "010-1234-5678");
        assert_eq!(result.details[0].masked, "***-****-****");
    }

    #[test]
    fn test_back_to_front_keeps_later_offsets_valid() {
        // Email token (9 chars) is longer than "a@b.co" (6 chars), passport token
        // (11 chars) is longer than "M1234567" (8 chars).
        let text = "a@b.co and M1234567!";
        let entities = vec![
            PiiEntity::new(PiiType::Email, "a@b.co", 0, 6),
            PiiEntity::new(PiiType::Passport, "M1234567", 11, 19),
        ];

        let result = Masker::new().mask(text, &entities).unwrap();
        assert_eq!(result.masked_text, "****@**** and ***********!");
        assert_eq!(result.masked_count, 2);
    }

    #[test]
    fn test_details_follow_reading_order() {
        let text = "x@y.co 010-1111-2222";
        // Deliberately supplied out of order.
        let entities = vec![
            PiiEntity::new(PiiType::MobilePhone, "010-1111-2222", 7, 20),
            PiiEntity::new(PiiType::Email, "x@y.co", 0, 6),
        ];

        let result = Masker::new().mask(text, &entities).unwrap();
        assert_eq!(result.details[0].pii_type, PiiType::Email);
        assert_eq!(result.details[1].pii_type, PiiType::MobilePhone);
    }

    #[test]
    fn test_unknown_type_uses_asterisks() {
        let text = "사번 EMP-123456";
        let entity = PiiEntity::new(
            PiiType::Other("employee-id".to_string()),
            "EMP-123456",
            3,
            13,
        );

        let result = Masker::new().mask(text, &[entity]).unwrap();
        assert_eq!(result.masked_text, "사번 **********");
    }

    #[test]
    fn test_invalid_span_fails() {
        let masker = Masker::new();
        let reversed = PiiEntity::new(PiiType::Email, "a", 4, 2);
        assert!(matches!(
            masker.mask("abcdef", &[reversed]),
            Err(MaskError::InvalidSpan { index: 0, .. })
        ));

        let too_long = PiiEntity::new(PiiType::Email, "a", 2, 40);
        assert!(matches!(
            masker.mask("abcdef", &[too_long]),
            Err(MaskError::InvalidSpan { len: 6, .. })
        ));
    }

    #[test]
    fn test_nested_overlap_is_best_effort() {
        let text = "110-010-1234-5678";
        let entities = vec![
            PiiEntity::new(PiiType::BankAccount, "110-010-1234-5678", 0, 17),
            PiiEntity::new(PiiType::MobilePhone, "010-1234-5678", 4, 17),
        ];

        let result = Masker::new().mask(text, &entities).unwrap();
        // The inner phone is masked first; the account then covers the whole buffer.
        assert_eq!(result.masked_text, "***-***-******");
        assert_eq!(result.masked_count, 2);
        assert_eq!(result.details[0].pii_type, PiiType::BankAccount);
    }

    #[test]
    fn test_overlap_into_shrunk_buffer_is_clamped() {
        // The later span shrinks the buffer below the earlier span's end.
        let text = "0123456789";
        let entities = vec![
            PiiEntity::new(PiiType::Other("a".to_string()), "0123456789", 0, 10),
            PiiEntity::new(PiiType::Other("b".to_string()), "56789", 5, 10),
        ];
        let mut table = MaskTable::empty();
        table.set(PiiType::Other("b".to_string()), "#");
        table.set(PiiType::Other("a".to_string()), "[A]");

        let result = Masker::with_table(table).mask(text, &entities).unwrap();
        assert_eq!(result.masked_text, "[A]");
    }
}
