//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// docmask - PII detection and masking for OCR text
#[derive(Parser, Debug)]
#[command(name = "docmask")]
#[command(version, about, long_about = None)]
#[command(author = "Docmask Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docmask.toml", env = "DOCMASK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCMASK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect PII in a document and print the entities as JSON
    Detect(commands::detect::DetectArgs),

    /// Mask given entities in a document and print the result as JSON
    Mask(commands::mask::MaskArgs),

    /// Detect and mask PII in one or more documents
    Process(commands::process::ProcessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
