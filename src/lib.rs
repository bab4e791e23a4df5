// Docmask - PII Detection and Masking for OCR Text
// Copyright (c) 2025 Docmask Contributors
// Licensed under the MIT License

//! # docmask - PII detection and masking for OCR text
//!
//! docmask finds personally identifiable information in text recognized from
//! scanned documents (Korean identity, contact and financial identifiers) and
//! replaces each occurrence with a fixed mask token.
//!
//! ## Overview
//!
//! - **Detecting** PII with an ordered regex catalogue, reporting character
//!   offsets into the text
//! - **Masking** detected spans back to front so offsets stay valid
//! - **Exposing** both steps as the `detect_pii` / `mask_pii` JSON interface
//! - **Auditing** processed documents with hashed PII values
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Detector, masker, tool interface, pipeline, audit and reports
//! - [`ocr`] - Parsing of upstream OCR output
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use docmask::masking::{MaskPiiResponse, PiiTools};
//!
//! # fn example() -> anyhow::Result<()> {
//! let tools = PiiTools::new()?;
//! let text = "연락처는 010-1234-5678 입니다";
//!
//! let detection = tools.detect_pii(text);
//! let entities = serde_json::to_value(&detection.entities)?;
//!
//! if let MaskPiiResponse::Masked(result) = tools.mask_pii(text, &entities) {
//!     assert_eq!(result.masked_text, "연락처는 ***-****-**** 입니다");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library errors use [`domain::DocmaskError`]; malformed masking input is
//! reported as [`domain::MaskError`] and surfaces through `mask_pii` as
//! `{ "error": "..." }`. Detection never fails.

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
pub mod ocr;
