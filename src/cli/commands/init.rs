//! Init command implementation
//!
//! Writes a commented default configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "docmask.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing docmask configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: docmask validate-config");
                println!("  3. Process documents: docmask process scan.json --ocr");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Default configuration with comments
    fn generate_config() -> String {
        r#"# docmask Configuration File
# PII detection and masking for OCR text

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (detect but don't mask)
dry_run = false

# ============================================================================
# Masking Configuration
# ============================================================================
[masking]
# Optional TOML file with extra or overriding patterns:
#
#   [[patterns]]
#   type = "employee-id"
#   pattern = 'EMP-\d{6}'
#   mask = "EMP-******"
#
# pattern_library = "patterns.toml"

# Report only the first-declared type when several types match the same span
collapse_identical_spans = true

[masking.audit]
# Append-only audit log; PII values are stored as SHA-256 hashes only
enabled = false
log_path = "./audit/masking.log"
json_format = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# JSON file logging in addition to console output
local_enabled = false
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
