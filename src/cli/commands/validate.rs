//! Validate config command implementation
//!
//! Loads the configuration file and the pattern library it names, and prints
//! a summary.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::load_config;
use crate::masking::detector::patterns::PatternRegistry;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let registry = match config.masking.pattern_library {
            Some(ref path) => match PatternRegistry::from_file(path) {
                Ok(registry) => {
                    println!("✅ Pattern library loaded: {}", path.display());
                    registry
                }
                Err(e) => {
                    println!("❌ Failed to load pattern library");
                    println!("   Error: {e:#}");
                    return Ok(EXIT_CONFIG_ERROR);
                }
            },
            None => PatternRegistry::default_patterns()?,
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.effective_masking().dry_run);
        println!(
            "  Pattern Library: {}",
            config
                .masking
                .pattern_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        );
        let types: Vec<String> = registry.types().iter().map(|t| t.to_string()).collect();
        println!("  PII Types: {}", types.join(", "));
        println!(
            "  Collapse Identical Spans: {}",
            config.masking.collapse_identical_spans
        );
        println!("  Audit Enabled: {}", config.masking.audit.enabled);
        if config.masking.audit.enabled {
            println!("  Audit Log: {}", config.masking.audit.log_path.display());
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute("/nonexistent/docmask.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG_ERROR);
    }

    #[tokio::test]
    async fn test_validate_with_pattern_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = dir.path().join("patterns.toml");
        std::fs::write(
            &library,
            "[[patterns]]\ntype = \"employee-id\"\npattern = 'EMP-\\d{6}'\n",
        )
        .unwrap();

        let config_path = dir.path().join("docmask.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "[masking]\npattern_library = {:?}", library.to_string_lossy()).unwrap();

        let code = ValidateArgs {}
            .execute(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, EXIT_SUCCESS);
    }
}
