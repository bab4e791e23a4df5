//! PII detection and masking for OCR text
//!
//! # Architecture
//!
//! - **Detection**: ordered regex catalogue producing character-offset spans
//! - **Masking**: back-to-front replacement of spans with fixed mask tokens
//! - **Tools**: the `detect_pii` / `mask_pii` JSON interface
//! - **Pipeline**: detect-then-mask per document with timing and auditing
//! - **Audit**: append-only log with hashed PII values
//!
//! # Usage
//!
//! ```rust
//! use docmask::masking::PiiTools;
//!
//! # fn example() -> anyhow::Result<()> {
//! let tools = PiiTools::new()?;
//! let detection = tools.detect_pii("연락처는 010-1234-5678 입니다");
//! assert_eq!(detection.pii_count, 1);
//! assert_eq!(detection.entities[0].start, 5);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod masker;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod tools;

pub use config::MaskingConfig;
pub use detector::{regex::RegexDetector, PiiDetector};
pub use masker::Masker;
pub use models::{DetectionResult, MaskDetail, MaskResult, PiiEntity, PiiType};
pub use pipeline::{PipelineOutcome, RedactionPipeline};
pub use report::ProcessingReport;
pub use tools::{MaskPiiResponse, PiiTools};
