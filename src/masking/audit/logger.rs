//! Audit logger for masking operations

use crate::masking::models::PiiEntity;
use crate::masking::pipeline::PipelineOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document_id: String,
    detections_count: usize,
    masked_count: usize,
    dry_run: bool,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    #[serde(rename = "type")]
    pii_type: String,
    start: usize,
    end: usize,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Append-only audit logger
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Path of the audit log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Log one processed document
    pub async fn log_outcome(&self, outcome: &PipelineOutcome) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            document_id: outcome.document_id.clone(),
            detections_count: outcome.detection.pii_count,
            masked_count: outcome.masking.masked_count,
            dry_run: outcome.dry_run,
            processing_time_ms: outcome.processing_time_ms,
            detections: outcome
                .detection
                .entities
                .iter()
                .map(Self::audit_detection)
                .collect(),
        };

        self.write_entry(&entry).await
    }

    fn audit_detection(entity: &PiiEntity) -> AuditDetection {
        AuditDetection {
            pii_type: entity.pii_type.name().to_string(),
            start: entity.start,
            end: entity.end,
            value_hash: hash_pii_value(&entity.value),
        }
    }

    /// Write an audit entry to the log file
    async fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let line = if self.json_format {
            serde_json::to_string(entry).context("Failed to serialize audit entry")?
        } else {
            format!(
                "[{}] Document: {} | Detections: {} | Masked: {} | Dry run: {} | Time: {}ms",
                entry.timestamp,
                entry.document_id,
                entry.detections_count,
                entry.masked_count,
                entry.dry_run,
                entry.processing_time_ms
            )
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .await
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        file.write_all(format!("{line}\n").as_bytes())
            .await
            .context("Failed to write audit entry")?;
        file.flush().await.context("Failed to flush audit log")?;

        Ok(())
    }
}

/// Hash a PII value using SHA-256
pub fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
