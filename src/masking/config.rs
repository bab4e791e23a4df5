//! Masking configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Detection and masking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Path to a pattern library TOML file extending the built-in catalogue
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Report only the first-declared category when several match the same span
    #[serde(default = "default_collapse_identical_spans")]
    pub collapse_identical_spans: bool,

    /// Dry-run mode (detect but don't mask)
    #[serde(default)]
    pub dry_run: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_collapse_identical_spans() -> bool {
    true
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            pattern_library: None,
            collapse_identical_spans: default_collapse_identical_spans(),
            dry_run: false,
            audit: AuditConfig::default(),
        }
    }
}

impl MaskingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                anyhow::bail!("Pattern library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Pattern library must be a TOML file: {}", path.display());
            }
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DOCMASK_MASKING_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("DOCMASK_MASKING_COLLAPSE_IDENTICAL_SPANS") {
            self.collapse_identical_spans = val
                .parse::<bool>()
                .context("Invalid DOCMASK_MASKING_COLLAPSE_IDENTICAL_SPANS value")?;
        }

        if let Ok(val) = std::env::var("DOCMASK_MASKING_DRY_RUN") {
            self.dry_run = val.parse::<bool>().context("Invalid DOCMASK_MASKING_DRY_RUN value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            anyhow::bail!("Audit logging enabled but log_path is empty");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DOCMASK_MASKING_AUDIT_ENABLED") {
            self.enabled = val
                .parse::<bool>()
                .context("Invalid DOCMASK_MASKING_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("DOCMASK_MASKING_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("DOCMASK_MASKING_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse::<bool>()
                .context("Invalid DOCMASK_MASKING_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
