//! Detect-then-mask pipeline
//!
//! [`RedactionPipeline`] runs detection followed by masking for one document,
//! times the run and writes an audit record when auditing is enabled.
//!
//! # Examples
//!
//! ```no_run
//! use docmask::masking::{config::MaskingConfig, RedactionPipeline};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pipeline = RedactionPipeline::new(MaskingConfig::default())?;
//!
//! let outcome = pipeline.process("scan-001", "연락처는 010-1234-5678 입니다").await?;
//! assert_eq!(outcome.masking.masked_text, "연락처는 ***-****-**** 입니다");
//! # Ok(())
//! # }
//! ```

use crate::masking::{
    audit::AuditLogger,
    config::MaskingConfig,
    detector::{patterns::PatternRegistry, regex::RegexDetector},
    masker::{MaskTable, Masker},
    models::{DetectionResult, MaskResult},
    report::ProcessingReport,
    tools::PiiTools,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Result of processing one document
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    /// Caller-supplied document identifier
    pub document_id: String,

    /// Entities found in the input text
    pub detection: DetectionResult,

    /// Masked text (the input text itself in dry-run mode)
    pub masking: MaskResult,

    /// Whether masking was skipped
    pub dry_run: bool,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,

    /// When processing finished
    pub timestamp: DateTime<Utc>,
}

impl PipelineOutcome {
    /// Check if any PII was found
    pub fn has_detections(&self) -> bool {
        self.detection.has_detections()
    }
}

/// Detect-then-mask pipeline
///
/// Shareable across tasks through `Arc`; the detector and masker hold only
/// compiled patterns and tokens.
pub struct RedactionPipeline {
    config: MaskingConfig,
    tools: PiiTools,
    audit_logger: Option<AuditLogger>,
}

impl RedactionPipeline {
    /// Create a new pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library cannot be loaded
    /// - The audit log directory cannot be created
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid masking configuration")?;

        let registry = match config.pattern_library {
            Some(ref path) => PatternRegistry::from_file(path)?,
            None => PatternRegistry::default_patterns()?,
        };

        let masker = Masker::with_table(MaskTable::from_registry(&registry));
        let detector = RegexDetector::with_registry(registry)
            .with_identical_span_collapse(config.collapse_identical_spans);
        let tools = PiiTools::with_parts(Arc::new(detector), masker);

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            tools,
            audit_logger,
        })
    }

    /// Process a single document
    ///
    /// Entities produced by the detector always lie inside the text, so a
    /// masking error here means the detector and masker disagree and is
    /// returned rather than swallowed.
    pub async fn process(&self, document_id: &str, text: &str) -> Result<PipelineOutcome> {
        let start = Instant::now();

        let detection = self.tools.detect_pii(text);

        let masking = if self.config.dry_run {
            MaskResult::unchanged(text)
        } else {
            self.tools
                .masker()
                .mask(text, &detection.entities)
                .with_context(|| format!("Failed to mask document {document_id}"))?
        };

        let outcome = PipelineOutcome {
            document_id: document_id.to_string(),
            detection,
            masking,
            dry_run: self.config.dry_run,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        tracing::debug!(
            document_id = %outcome.document_id,
            detections = outcome.detection.pii_count,
            masked = outcome.masking.masked_count,
            dry_run = outcome.dry_run,
            duration_ms = outcome.processing_time_ms,
            "Document processed"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_outcome(&outcome).await?;
        }

        Ok(outcome)
    }

    /// Process a batch of `(document_id, text)` pairs
    ///
    /// A failed document is logged and left out of the results.
    pub async fn process_batch(&self, documents: Vec<(String, String)>) -> Vec<PipelineOutcome> {
        let (outcomes, _) = self.process_batch_with_report(documents).await;
        outcomes
    }

    /// Process a batch and build a report over it
    pub async fn process_batch_with_report(
        &self,
        documents: Vec<(String, String)>,
    ) -> (Vec<PipelineOutcome>, ProcessingReport) {
        let mut outcomes = Vec::with_capacity(documents.len());
        let mut report = ProcessingReport::new(self.config.dry_run);

        for (document_id, text) in documents {
            match self.process(&document_id, &text).await {
                Ok(outcome) => {
                    report.add_outcome(&outcome);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    tracing::error!(document_id = %document_id, error = ?e, "Failed to process document");
                    report.add_warning(format!("Failed to process {document_id}: {e}"));
                }
            }
        }

        (outcomes, report)
    }

    /// Tools sharing this pipeline's detector and masker
    pub fn tools(&self) -> &PiiTools {
        &self.tools
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
