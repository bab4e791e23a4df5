//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels (`RUST_LOG` or `docmask=<level>`)
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! PII values are never logged; events carry counts, categories and spans.
//!
//! # Example
//!
//! ```no_run
//! use docmask::logging::init_logging;
//! use docmask::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config)?;
//!
//! tracing::info!("Application started");
//! # Ok::<(), docmask::domain::DocmaskError>(())
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a processed document
///
/// # Example
///
/// ```no_run
/// use docmask::log_document_processed;
///
/// log_document_processed!("scan-001", 3, 3, 12u64);
/// ```
#[macro_export]
macro_rules! log_document_processed {
    ($document_id:expr, $detections:expr, $masked:expr, $duration_ms:expr) => {
        tracing::info!(
            document_id = %$document_id,
            detections = $detections,
            masked = $masked,
            duration_ms = $duration_ms,
            "Document processed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use docmask::log_error_with_context;
/// use docmask::domain::DocmaskError;
///
/// let error = DocmaskError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
