//! Shared span contract between the detector and the masker

pub mod pii_entity;

pub use pii_entity::{DetectionResult, MaskDetail, MaskResult, PiiEntity, PiiType};
