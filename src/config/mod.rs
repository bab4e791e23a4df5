//! Configuration management for docmask.
//!
//! TOML configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DOCMASK_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [masking]
//! pattern_library = "patterns.toml"
//!
//! [masking.audit]
//! enabled = true
//! log_path = "${DOCMASK_AUDIT_DIR}/masking.log"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use docmask::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docmask.toml")?;
//! println!("Log level: {}", config.application.log_level);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, DocmaskConfig, LoggingConfig};
