//! PII entity data models

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// PII category
///
/// The built-in categories cover the identifiers found on Korean identity,
/// contact and financial documents. Any other category name (for instance one
/// introduced by a pattern library) is carried as [`PiiType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PiiType {
    /// Resident registration number
    NationalId,
    /// Mobile phone number
    MobilePhone,
    /// Landline phone number
    LandlinePhone,
    /// Email address
    Email,
    /// Payment card number
    CardNumber,
    /// Bank account number
    BankAccount,
    /// Driver license number
    DriverLicense,
    /// Passport number
    Passport,
    /// Category without a built-in definition
    Other(String),
}

impl PiiType {
    /// Built-in categories in declaration (precedence) order
    pub const BUILTIN: [PiiType; 8] = [
        PiiType::NationalId,
        PiiType::MobilePhone,
        PiiType::LandlinePhone,
        PiiType::Email,
        PiiType::CardNumber,
        PiiType::BankAccount,
        PiiType::DriverLicense,
        PiiType::Passport,
    ];

    /// Resolve a category from its wire name or Korean label.
    ///
    /// Unknown names never fail; they become [`PiiType::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "national-id" | "주민등록번호" => Self::NationalId,
            "mobile-phone" | "휴대폰번호" => Self::MobilePhone,
            "landline-phone" | "유선전화번호" => Self::LandlinePhone,
            "email" | "이메일" => Self::Email,
            "card-number" | "카드번호" => Self::CardNumber,
            "bank-account" | "계좌번호" => Self::BankAccount,
            "driver-license" | "운전면허번호" => Self::DriverLicense,
            "passport" | "여권번호" => Self::Passport,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire name used in JSON and TOML
    pub fn name(&self) -> &str {
        match self {
            Self::NationalId => "national-id",
            Self::MobilePhone => "mobile-phone",
            Self::LandlinePhone => "landline-phone",
            Self::Email => "email",
            Self::CardNumber => "card-number",
            Self::BankAccount => "bank-account",
            Self::DriverLicense => "driver-license",
            Self::Passport => "passport",
            Self::Other(name) => name,
        }
    }

    /// Human-readable Korean label
    pub fn label(&self) -> &str {
        match self {
            Self::NationalId => "주민등록번호",
            Self::MobilePhone => "휴대폰번호",
            Self::LandlinePhone => "유선전화번호",
            Self::Email => "이메일",
            Self::CardNumber => "카드번호",
            Self::BankAccount => "계좌번호",
            Self::DriverLicense => "운전면허번호",
            Self::Passport => "여권번호",
            Self::Other(name) => name,
        }
    }

    /// Check if this is one of the built-in categories
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PiiType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PiiType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Detected PII span
///
/// `start` and `end` are character offsets into the scanned text, forming the
/// half-open interval `[start, end)`. `value` is the literal matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiEntity {
    /// Category of PII
    #[serde(rename = "type")]
    pub pii_type: PiiType,
    /// Literal matched substring
    pub value: String,
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl PiiEntity {
    /// Create a new PII entity
    pub fn new(pii_type: PiiType, value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            pii_type,
            value: value.into(),
            start,
            end,
        }
    }

    /// Number of characters covered by the span
    pub fn span_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether two spans share at least one character
    pub fn overlaps(&self, other: &PiiEntity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One applied replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskDetail {
    /// Category of the masked entity
    #[serde(rename = "type")]
    pub pii_type: PiiType,
    /// Original entity value
    pub original: String,
    /// Token written in its place
    pub masked: String,
}

/// Detector output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Number of detected entities
    pub pii_count: usize,
    /// Entities in ascending `start` order
    pub entities: Vec<PiiEntity>,
}

impl DetectionResult {
    /// Build a result from already-ordered entities
    pub fn from_entities(entities: Vec<PiiEntity>) -> Self {
        Self {
            pii_count: entities.len(),
            entities,
        }
    }

    /// Check if any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.entities.is_empty()
    }
}

/// Masker output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskResult {
    /// Rewritten text
    pub masked_text: String,
    /// Number of applied replacements
    pub masked_count: usize,
    /// Replacements in ascending original `start` order
    pub details: Vec<MaskDetail>,
}

impl MaskResult {
    /// Result for a call that changed nothing
    pub fn unchanged(text: &str) -> Self {
        Self {
            masked_text: text.to_string(),
            masked_count: 0,
            details: Vec::new(),
        }
    }
}
