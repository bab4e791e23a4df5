//! Type to mask-token table

use crate::masking::detector::patterns::PatternRegistry;
use crate::masking::models::{PiiEntity, PiiType};

/// Built-in mask tokens in declaration order
pub const BUILTIN_MASKS: [(PiiType, &str); 8] = [
    (PiiType::NationalId, "******-*******"),
    (PiiType::MobilePhone, "***-****-****"),
    (PiiType::LandlinePhone, "***-****-****"),
    (PiiType::Email, "****@****"),
    (PiiType::CardNumber, "****-****-****-****"),
    (PiiType::BankAccount, "***-***-******"),
    (PiiType::DriverLicense, "**-**-******-**"),
    (PiiType::Passport, "***********"),
];

/// Ordered association list from category to mask token
///
/// Categories without an entry are masked with one `*` per character of the
/// original value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTable {
    entries: Vec<(PiiType, String)>,
}

impl MaskTable {
    /// Table with no entries; every category uses the fallback mask
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Built-in tokens plus any tokens declared in a pattern registry
    pub fn from_registry(registry: &PatternRegistry) -> Self {
        let mut table = Self::default();
        for pattern in registry.all_patterns() {
            if let Some(ref mask) = pattern.mask {
                table.set(pattern.pii_type.clone(), mask.clone());
            }
        }
        table
    }

    /// Insert or replace the token for a category
    pub fn set(&mut self, pii_type: PiiType, token: impl Into<String>) {
        let token = token.into();
        match self.entries.iter_mut().find(|(t, _)| *t == pii_type) {
            Some(entry) => entry.1 = token,
            None => self.entries.push((pii_type, token)),
        }
    }

    /// Token registered for a category, if any
    pub fn token(&self, pii_type: &PiiType) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == pii_type)
            .map(|(_, token)| token.as_str())
    }

    /// Replacement text for an entity
    pub fn mask_for(&self, entity: &PiiEntity) -> String {
        match self.token(&entity.pii_type) {
            Some(token) => token.to_string(),
            None => "*".repeat(entity.value.chars().count()),
        }
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[(PiiType, String)] {
        &self.entries
    }
}

impl Default for MaskTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN_MASKS
                .iter()
                .map(|(pii_type, token)| (pii_type.clone(), token.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tokens() {
        let table = MaskTable::default();
        assert_eq!(table.token(&PiiType::NationalId), Some("******-*******"));
        assert_eq!(table.token(&PiiType::Email), Some("****@****"));
        assert_eq!(table.token(&PiiType::Passport), Some("***********"));
        assert_eq!(table.entries().len(), 8);
    }

    #[test]
    fn test_fallback_counts_characters() {
        let table = MaskTable::default();
        let entity = PiiEntity::new(PiiType::Other("사번".to_string()), "가나다-12", 0, 6);
        assert_eq!(table.mask_for(&entity), "******");
    }

    #[test]
    fn test_set_replaces_existing_token() {
        let mut table = MaskTable::default();
        table.set(PiiType::Email, "[EMAIL]");
        assert_eq!(table.token(&PiiType::Email), Some("[EMAIL]"));
        assert_eq!(table.entries().len(), 8);
    }

    #[test]
    fn test_from_registry_adds_library_tokens() {
        let registry = PatternRegistry::from_toml(
            r#"
[[patterns]]
type = "employee-id"
pattern = 'EMP-\d{6}'
mask = "EMP-******"
"#,
        )
        .unwrap();

        let table = MaskTable::from_registry(&registry);
        assert_eq!(
            table.token(&PiiType::Other("employee-id".to_string())),
            Some("EMP-******")
        );
        assert_eq!(table.token(&PiiType::MobilePhone), Some("***-****-****"));
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let table = MaskTable::empty();
        let entity = PiiEntity::new(PiiType::Email, "a@b.co", 0, 6);
        assert_eq!(table.mask_for(&entity), "******");
    }
}
