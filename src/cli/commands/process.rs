//! Process command implementation
//!
//! Runs the detect-then-mask pipeline over one or more documents, prints the
//! masked text of each and a summary report.

use super::{load_command_config, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS};
use crate::masking::{ProcessingReport, RedactionPipeline};
use crate::ocr;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input documents
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat inputs as OCR output JSON
    #[arg(long)]
    pub ocr: bool,

    /// Detect only, leave text unmasked
    #[arg(long)]
    pub dry_run: bool,

    /// Write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = load_command_config(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let mut masking = config.effective_masking();
        if self.dry_run {
            tracing::info!("Dry-run enabled from CLI");
            masking.dry_run = true;
        }

        let pipeline = match RedactionPipeline::new(masking) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        tracing::info!(
            documents = self.files.len(),
            dry_run = pipeline.is_dry_run(),
            "Starting processing"
        );

        let mut report = ProcessingReport::new(pipeline.is_dry_run());
        let mut failed = 0usize;

        for path in &self.files {
            let document_id = document_id(path);

            let text = match ocr::load_document_text(path, self.ocr).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(document_id = %document_id, error = %e, "Skipping document");
                    report.add_warning(format!("Failed to read {document_id}: {e}"));
                    failed += 1;
                    continue;
                }
            };

            match pipeline.process(&document_id, &text).await {
                Ok(outcome) => {
                    crate::log_document_processed!(
                        outcome.document_id,
                        outcome.detection.pii_count,
                        outcome.masking.masked_count,
                        outcome.processing_time_ms
                    );
                    println!("=== {} ===", outcome.document_id);
                    println!("{}", outcome.masking.masked_text);
                    report.add_outcome(&outcome);
                }
                Err(e) => {
                    tracing::error!(document_id = %document_id, error = ?e, "Failed to process document");
                    report.add_warning(format!("Failed to process {document_id}: {e:#}"));
                    failed += 1;
                }
            }
        }

        print!("{}", report.format_console());

        if let Some(ref report_path) = self.report {
            match report.write_to_file(report_path) {
                Ok(()) => println!("📄 Report written to {}", report_path.display()),
                Err(e) => {
                    eprintln!("❌ Failed to write report {}: {e}", report_path.display());
                    return Ok(super::EXIT_FATAL);
                }
            }
        }

        if failed > 0 {
            Ok(EXIT_INPUT_ERROR)
        } else {
            Ok(EXIT_SUCCESS)
        }
    }
}

fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
