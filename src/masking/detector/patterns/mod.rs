//! Pattern catalogue for PII detection
//!
//! The registry is an ordered list: declaration order is also the tie-break
//! order for entities that start at the same offset.

use crate::domain::errors::DocmaskError;
use crate::masking::models::PiiType;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Built-in patterns in declaration order
pub const BUILTIN_PATTERNS: [(PiiType, &str); 8] = [
    (PiiType::NationalId, r"\d{6}\s*[-–]\s*[1-4]\d{6}"),
    (
        PiiType::MobilePhone,
        r"01[016789]\s*[-–.]?\s*\d{3,4}\s*[-–.]?\s*\d{4}",
    ),
    (
        PiiType::LandlinePhone,
        r"0[2-6][0-5]?\s*[-–.]?\s*\d{3,4}\s*[-–.]?\s*\d{4}",
    ),
    (
        PiiType::Email,
        r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}",
    ),
    (
        PiiType::CardNumber,
        r"\d{4}\s*[-–.]?\s*\d{4}\s*[-–.]?\s*\d{4}\s*[-–.]?\s*\d{4}",
    ),
    (
        PiiType::BankAccount,
        r"\d{3,6}\s*[-–]\s*\d{2,6}\s*[-–]\s*\d{1,6}(?:\s*[-–]\s*\d{1,6})?",
    ),
    (
        PiiType::DriverLicense,
        r"\d{2}\s*[-–]\s*\d{2}\s*[-–]\s*\d{6}\s*[-–]\s*\d{2}",
    ),
    (PiiType::Passport, r"[A-Z]{1,2}\d{7,8}"),
];

/// Pattern definition from a TOML pattern library
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Category name (wire name or Korean label)
    #[serde(rename = "type")]
    pub pii_type: String,
    /// Regex source
    pub pattern: String,
    /// Mask token for this category
    #[serde(default)]
    pub mask: Option<String>,
}

/// Pattern library file contents
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Compiled pattern with its category
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// PII category
    pub pii_type: PiiType,
    /// Compiled regex
    pub regex: Regex,
    /// Mask token supplied alongside the pattern, if any
    pub mask: Option<String>,
}

/// Ordered pattern registry
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a registry holding the built-in catalogue
    pub fn default_patterns() -> Result<Self> {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|(pii_type, source)| {
                let regex = Regex::new(source)
                    .with_context(|| format!("Invalid built-in pattern for '{pii_type}'"))?;
                Ok(CompiledPattern {
                    pii_type: pii_type.clone(),
                    regex,
                    mask: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Create a registry from the built-in catalogue extended by a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::domain::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocmaskError::PatternLibrary(format!("Failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
            .map_err(|e| DocmaskError::PatternLibrary(format!("{}: {e:#}", path.display())))
    }

    /// Create a registry from the built-in catalogue extended by TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut registry = Self::default_patterns()?;
        registry.extend_from_toml(content)?;
        Ok(registry)
    }

    /// Apply a pattern library on top of the current patterns.
    ///
    /// An entry for a category that is already registered replaces it in place;
    /// an entry for a new category is appended.
    pub fn extend_from_toml(&mut self, content: &str) -> Result<()> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        for def in library.patterns {
            let name = def.pii_type.trim();
            if name.is_empty() {
                anyhow::bail!("Pattern library entry has an empty type: {}", def.pattern);
            }

            let regex = Regex::new(&def.pattern)
                .with_context(|| format!("Invalid regex in pattern '{name}': {}", def.pattern))?;

            self.register(CompiledPattern {
                pii_type: PiiType::from_name(name),
                regex,
                mask: def.mask,
            });
        }

        Ok(())
    }

    /// Insert or replace a compiled pattern
    pub fn register(&mut self, pattern: CompiledPattern) {
        match self
            .patterns
            .iter_mut()
            .find(|existing| existing.pii_type == pattern.pii_type)
        {
            Some(existing) => {
                existing.regex = pattern.regex;
                if pattern.mask.is_some() {
                    existing.mask = pattern.mask;
                }
            }
            None => self.patterns.push(pattern),
        }
    }

    /// Get all patterns in declaration order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get the pattern for a specific category
    pub fn pattern_for(&self, pii_type: &PiiType) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| &p.pii_type == pii_type)
    }

    /// Categories in declaration order
    pub fn types(&self) -> Vec<PiiType> {
        self.patterns.iter().map(|p| p.pii_type.clone()).collect()
    }
}
