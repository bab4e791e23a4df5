//! Regex-based PII detector

use super::{patterns::PatternRegistry, PiiDetector};
use crate::masking::models::{DetectionResult, PiiEntity, PiiType};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Regex-based PII detector
///
/// Every pattern is run independently over the whole text, so matches of
/// different categories may overlap or nest. When two categories match the
/// exact same span, only the first-declared one is reported unless
/// [`with_identical_span_collapse`](Self::with_identical_span_collapse) turns
/// that off.
#[derive(Debug, Clone)]
pub struct RegexDetector {
    pattern_registry: Arc<PatternRegistry>,
    collapse_identical_spans: bool,
}

impl RegexDetector {
    /// Create a new regex detector with the built-in patterns
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self::with_registry(registry))
    }

    /// Create a new regex detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            pattern_registry: Arc::new(registry),
            collapse_identical_spans: true,
        }
    }

    /// Report every category for spans matched by more than one pattern
    pub fn with_identical_span_collapse(mut self, collapse: bool) -> Self {
        self.collapse_identical_spans = collapse;
        self
    }

    /// Registry backing this detector
    pub fn registry(&self) -> &PatternRegistry {
        &self.pattern_registry
    }

    fn scan(&self, text: &str) -> Vec<PiiEntity> {
        let index = CharIndex::new(text);
        let mut entities = Vec::new();

        for pattern in self.pattern_registry.all_patterns() {
            for matched in pattern.regex.find_iter(text) {
                // Empty matches can only come from a custom pattern; they carry no span.
                if matched.is_empty() {
                    continue;
                }
                entities.push(PiiEntity::new(
                    pattern.pii_type.clone(),
                    matched.as_str(),
                    index.char_offset(matched.start()),
                    index.char_offset(matched.end()),
                ));
            }
        }

        // Stable: equal starts keep pattern declaration order.
        entities.sort_by_key(|e| e.start);

        if self.collapse_identical_spans {
            let mut seen = HashSet::new();
            entities.retain(|e| seen.insert((e.start, e.end)));
        }

        entities
    }
}

impl PiiDetector for RegexDetector {
    fn detect(&self, text: &str) -> DetectionResult {
        if text.is_empty() {
            return DetectionResult::from_entities(Vec::new());
        }

        let entities = self.scan(text);
        tracing::debug!(
            text_chars = text.chars().count(),
            pii_count = entities.len(),
            "PII detection finished"
        );
        DetectionResult::from_entities(entities)
    }

    fn supported_types(&self) -> Vec<PiiType> {
        self.pattern_registry.types()
    }
}

/// Byte offset to character offset lookup
struct CharIndex {
    /// Byte offset of every char, followed by the text length. `None` for ASCII text.
    boundaries: Option<Vec<usize>>,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let boundaries = if text.is_ascii() {
            None
        } else {
            Some(
                text.char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(text.len()))
                    .collect(),
            )
        };
        Self { boundaries }
    }

    fn char_offset(&self, byte_offset: usize) -> usize {
        match &self.boundaries {
            None => byte_offset,
            Some(boundaries) => boundaries.partition_point(|&b| b < byte_offset),
        }
    }
}
