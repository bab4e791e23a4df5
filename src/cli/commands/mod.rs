//! CLI command implementations

pub mod detect;
pub mod init;
pub mod mask;
pub mod process;
pub mod validate;

use crate::config::{load_config_or_default, DocmaskConfig};
use crate::domain::{DocmaskError, Result};
use crate::ocr;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Exit code: success
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code: configuration error
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code: malformed input
pub const EXIT_INPUT_ERROR: i32 = 3;
/// Exit code: fatal error
pub const EXIT_FATAL: i32 = 5;

/// Load configuration for a processing command, falling back to defaults
/// when the file does not exist. Errors are printed to stderr.
pub(crate) fn load_command_config(config_path: &str) -> Option<DocmaskConfig> {
    match load_config_or_default(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to load configuration");
            eprintln!("❌ {e}");
            None
        }
    }
}

/// Read command input from a file, or stdin for `-` or no path
pub(crate) async fn read_input(input: Option<&str>, ocr_json: bool) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .map_err(|e| DocmaskError::Io(format!("Failed to read stdin: {e}")))?;
            ocr::document_text(&content, ocr_json)
        }
        Some(path) => ocr::load_document_text(Path::new(path), ocr_json).await,
    }
}

/// Exit code for an input error
pub(crate) fn input_error_code(err: &DocmaskError) -> i32 {
    match err {
        DocmaskError::Io(_) | DocmaskError::Ocr(_) | DocmaskError::Serialization(_) => {
            EXIT_INPUT_ERROR
        }
        DocmaskError::Mask(_) | DocmaskError::Validation(_) => EXIT_INPUT_ERROR,
        DocmaskError::Configuration(_) | DocmaskError::PatternLibrary(_) => EXIT_CONFIG_ERROR,
        DocmaskError::Other(_) => EXIT_FATAL,
    }
}
