//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DocmaskConfig;
use crate::domain::errors::DocmaskError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DocmaskConfig
/// 4. Applies environment variable overrides (DOCMASK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`DocmaskError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use docmask::config::loader::load_config;
///
/// let config = load_config("docmask.toml")?;
/// # Ok::<(), docmask::domain::DocmaskError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DocmaskConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocmaskError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DocmaskError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DocmaskConfig = toml::from_str(&contents)
        .map_err(|e| DocmaskError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from a TOML file, or the defaults if it does not exist
///
/// Overrides and validation apply either way.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<DocmaskConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    let mut config = DocmaskConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut DocmaskConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        DocmaskError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DocmaskError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DocmaskError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using DOCMASK_* prefix
///
/// Environment variables follow the pattern: DOCMASK_<SECTION>_<KEY>
/// For example: DOCMASK_APPLICATION_LOG_LEVEL, DOCMASK_MASKING_AUDIT_ENABLED
fn apply_env_overrides(config: &mut DocmaskConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("DOCMASK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("DOCMASK_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool_override("DOCMASK_APPLICATION_DRY_RUN", &val)?;
    }

    // Masking overrides
    config
        .masking
        .apply_env_overrides()
        .map_err(|e| DocmaskError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("DOCMASK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("DOCMASK_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("DOCMASK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("DOCMASK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool_override(name: &str, val: &str) -> Result<bool> {
    val.parse::<bool>().map_err(|_| {
        DocmaskError::Configuration(format!(
            "Invalid {name} value '{val}': expected true or false"
        ))
    })
}
