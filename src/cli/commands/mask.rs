//! Mask command implementation
//!
//! Applies a caller-supplied entity list to one document and prints the
//! `mask_pii` response as JSON on stdout.

use super::{
    input_error_code, load_command_config, read_input, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR,
    EXIT_SUCCESS,
};
use crate::masking::RedactionPipeline;
use anyhow::Context;
use clap::Args;
use serde_json::Value;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Input file (`-` or omitted for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat the input as OCR output JSON
    #[arg(long)]
    pub ocr: bool,

    /// Entity list as JSON, or `@FILE` to read it from a file
    #[arg(short, long)]
    pub entities: String,
}

impl MaskArgs {
    /// Execute the mask command
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

        let entities = match self.entities_json().await {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        let text = match read_input(self.input.as_deref(), self.ocr).await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(input_error_code(&e));
            }
        };

        // The tool interface parses serialized lists itself and reports
        // unparseable input as `{ error }`.
        let response = pipeline
            .tools()
            .mask_pii(&text, &Value::String(entities));
        println!(
            "{}",
            response
                .to_json()
                .context("Failed to serialize masking result")?
        );

        if response.is_error() {
            Ok(EXIT_INPUT_ERROR)
        } else {
            Ok(EXIT_SUCCESS)
        }
    }

    async fn entities_json(&self) -> anyhow::Result<String> {
        match self.entities.strip_prefix('@') {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read entity file {path}")),
            None => Ok(self.entities.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_file(dir: &tempfile::TempDir, text: &str) -> String {
        let path = dir.path().join("scan.txt");
        std::fs::write(&path, text).unwrap();
        path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn test_mask_inline_entities() {
        let dir = tempfile::tempdir().unwrap();
        let args = MaskArgs {
            input: Some(input_file(&dir, "연락처는 010-1234-5678 입니다")),
            ocr: false,
            entities: r#"[{"type":"mobile-phone","value":"010-1234-5678","start":5,"end":18}]"#
                .to_string(),
        };
        let code = args.execute("/nonexistent/docmask.toml").await.unwrap();
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_mask_unparseable_entities() {
        let dir = tempfile::tempdir().unwrap();
        let args = MaskArgs {
            input: Some(input_file(&dir, "text")),
            ocr: false,
            entities: "[{broken".to_string(),
        };
        let code = args.execute("/nonexistent/docmask.toml").await.unwrap();
        assert_eq!(code, EXIT_INPUT_ERROR);
    }

    #[tokio::test]
    async fn test_entities_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entities.json");
        std::fs::write(&path, "[]").unwrap();

        let args = MaskArgs {
            input: None,
            ocr: false,
            entities: format!("@{}", path.display()),
        };
        assert_eq!(args.entities_json().await.unwrap(), "[]");
    }
}
