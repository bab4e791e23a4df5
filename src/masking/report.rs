//! Processing reports
//!
//! Aggregates pipeline outcomes across documents: detection statistics per
//! category, sample mask tokens and warnings for documents that failed.

use crate::masking::models::PiiType;
use crate::masking::pipeline::PipelineOutcome;
use serde::{Deserialize, Serialize};

/// Cap on the number of samples kept in a report
const MAX_SAMPLES: usize = 20;

/// Report over a batch of processed documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingReport {
    /// Whether masking was skipped for this run
    pub dry_run: bool,

    /// Documents processed successfully
    pub total_documents: usize,

    /// Documents with at least one detection
    pub documents_with_pii: usize,

    /// Documents without detections
    pub documents_without_pii: usize,

    /// Total entities detected
    pub total_pii_detected: usize,

    /// Total spans replaced
    pub total_masked: usize,

    /// Detections per category, in first-seen order
    pub detections_by_type: Vec<TypeCount>,

    /// Sample replacements (tokens only)
    pub samples: Vec<MaskSample>,

    /// Failures and other notes
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Detection count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub pii_type: PiiType,
    pub count: usize,
}

/// Sample replacement. The original value is never kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskSample {
    pub document_id: String,

    #[serde(rename = "type")]
    pub pii_type: PiiType,

    /// Character span in the source text
    pub start: usize,
    pub end: usize,

    /// Token the span was (or would be) replaced with
    pub masked: String,
}

/// Processing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per document (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,
}

impl ProcessingReport {
    /// Create a new empty report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            total_documents: 0,
            documents_with_pii: 0,
            documents_without_pii: 0,
            total_pii_detected: 0,
            total_masked: 0,
            detections_by_type: Vec::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Add one processed document
    pub fn add_outcome(&mut self, outcome: &PipelineOutcome) {
        self.total_documents += 1;
        self.total_masked += outcome.masking.masked_count;
        self.stats.total_processing_time_ms += outcome.processing_time_ms;
        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_documents as u64;

        if !outcome.has_detections() {
            self.documents_without_pii += 1;
            return;
        }

        self.documents_with_pii += 1;
        self.total_pii_detected += outcome.detection.pii_count;

        for entity in &outcome.detection.entities {
            match self
                .detections_by_type
                .iter_mut()
                .find(|c| c.pii_type == entity.pii_type)
            {
                Some(entry) => entry.count += 1,
                None => self.detections_by_type.push(TypeCount {
                    pii_type: entity.pii_type.clone(),
                    count: 1,
                }),
            }
        }

        // Up to three samples per document. Details come back in masking order,
        // so each entity is paired with the first unused detail of the same type
        // and value. In dry-run mode there are no mask details, so the category
        // label stands in for the token.
        let mut used = vec![false; outcome.masking.details.len()];
        for entity in outcome.detection.entities.iter().take(3) {
            if self.samples.len() >= MAX_SAMPLES {
                break;
            }
            let detail = outcome
                .masking
                .details
                .iter()
                .enumerate()
                .find(|(i, d)| {
                    !used[*i] && d.pii_type == entity.pii_type && d.original == entity.value
                });
            let masked = match detail {
                Some((i, d)) => {
                    used[i] = true;
                    d.masked.clone()
                }
                None => format!("[{}]", entity.pii_type.label()),
            };

            self.samples.push(MaskSample {
                document_id: outcome.document_id.clone(),
                pii_type: entity.pii_type.clone(),
                start: entity.start,
                end: entity.end,
                masked,
            });
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Per-category counts with built-in categories first, in declaration order
    pub fn counts_in_declaration_order(&self) -> Vec<&TypeCount> {
        let mut counts: Vec<&TypeCount> = self.detections_by_type.iter().collect();
        counts.sort_by_key(|c| {
            PiiType::BUILTIN
                .iter()
                .position(|t| *t == c.pii_type)
                .unwrap_or(PiiType::BUILTIN.len())
        });
        counts
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();
        let title = if self.dry_run {
            "                  PII MASKING DRY-RUN REPORT                   "
        } else {
            "                    PII MASKING REPORT                         "
        };

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str(title);
        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Documents Processed:   {}\n",
            self.total_documents
        ));
        output.push_str(&format!(
            "  Documents with PII:          {}\n",
            self.documents_with_pii
        ));
        output.push_str(&format!(
            "  Documents without PII:       {}\n",
            self.documents_without_pii
        ));
        output.push_str(&format!(
            "  Total PII Entities Detected: {}\n",
            self.total_pii_detected
        ));
        output.push_str(&format!(
            "  Total Spans Masked:          {}\n",
            self.total_masked
        ));
        output.push_str(&format!(
            "  Avg Processing Time:         {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push('\n');

        if !self.detections_by_type.is_empty() {
            output.push_str("🔍 PII DETECTIONS BY TYPE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for count in self.counts_in_declaration_order() {
                output.push_str(&format!(
                    "  {:30} {:>5}\n",
                    count.pii_type.name(),
                    count.count
                ));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE REPLACEMENTS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Document:  {}\n", sample.document_id));
                output.push_str(&format!("    Type:      {}\n", sample.pii_type));
                output.push_str(&format!("    Span:      {}..{}\n", sample.start, sample.end));
                output.push_str(&format!("    Masked:    \"{}\"\n", sample.masked));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as pretty JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for ProcessingReport {
    fn default() -> Self {
        Self::new(false)
    }
}
