//! Detect command implementation
//!
//! Prints the `detect_pii` result for one document as JSON on stdout.

use super::{input_error_code, load_command_config, read_input, EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::masking::RedactionPipeline;
use anyhow::Context;
use clap::Args;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file (`-` or omitted for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat the input as OCR output JSON
    #[arg(long)]
    pub ocr: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = load_command_config(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let pipeline = match RedactionPipeline::new(config.effective_masking()) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let text = match read_input(self.input.as_deref(), self.ocr).await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(input_error_code(&e));
            }
        };

        let detection = pipeline.tools().detect_pii(&text);
        tracing::info!(pii_count = detection.pii_count, "Detection finished");

        let json = if self.pretty {
            serde_json::to_string_pretty(&detection)
        } else {
            serde_json::to_string(&detection)
        }
        .context("Failed to serialize detection result")?;
        println!("{json}");

        Ok(EXIT_SUCCESS)
    }
}
