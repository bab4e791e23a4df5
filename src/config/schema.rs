//! Configuration schema types
//!
//! Every section is optional; an empty file yields the defaults.

use crate::masking::config::MaskingConfig;
use serde::{Deserialize, Serialize};

/// Main docmask configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocmaskConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detection and masking settings
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DocmaskConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.masking.validate().map_err(|e| format!("{e:#}"))?;
        self.logging.validate()?;
        Ok(())
    }

    /// Masking settings with the application-wide dry-run flag folded in
    pub fn effective_masking(&self) -> MaskingConfig {
        let mut masking = self.masking.clone();
        masking.dry_run |= self.application.dry_run;
        masking
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (detect but don't mask)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: DocmaskConfig = toml::from_str("").unwrap();
        assert_eq!(config, DocmaskConfig::default());
        assert_eq!(config.application.log_level, "info");
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = DocmaskConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = DocmaskConfig::default();
        config.logging.local_rotation = "size".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_masking_errors_surface() {
        let mut config = DocmaskConfig::default();
        config.masking.pattern_library = Some("/nonexistent/patterns.toml".into());
        let err = config.validate().unwrap_err();
        assert!(err.contains("Pattern library file not found"));
    }

    #[test]
    fn test_effective_masking_dry_run() {
        let mut config = DocmaskConfig::default();
        assert!(!config.effective_masking().dry_run);

        config.application.dry_run = true;
        assert!(config.effective_masking().dry_run);
    }

    #[test]
    fn test_nested_audit_section() {
        let config: DocmaskConfig = toml::from_str(
            r#"
[masking.audit]
enabled = true
log_path = "/tmp/docmask-audit.log"
"#,
        )
        .unwrap();
        assert!(config.masking.audit.enabled);
        assert!(config.masking.audit.json_format);
        assert!(config.masking.collapse_identical_spans);
    }
}
