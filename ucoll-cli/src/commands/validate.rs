//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use ucoll_api::{ApiError, CollationError, CollationProcessor, Config};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ValidateArgs {
    /// Tailoring rules file to validate
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Collation config file (TOML) to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let (label, result) = match (&self.rules, &self.config) {
            (Some(path), _) => {
                println!("Validating rules: {}", path.display());
                let rules = FileReader::read_text(path)?;
                (
                    path.display().to_string(),
                    Config::builder().rules(rules).build().and_then(CollationProcessor::with_config),
                )
            }
            (None, Some(path)) => {
                println!("Validating collation config: {}", path.display());
                (
                    path.display().to_string(),
                    Config::from_file(path).and_then(CollationProcessor::with_config),
                )
            }
            (None, None) => {
                return Err(CliError::ConfigError("nothing to validate".to_string()).into())
            }
        };

        match result {
            Ok(processor) => {
                println!("✓ Configuration is valid!");
                println!("  Source: {}", processor.config().source_label());
                println!("  Collator version: {}", processor.collator().version());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                if let ApiError::Collation(CollationError::InvalidRules { line, offset, .. }) = &e {
                    println!("  Line {line}, offset {offset}");
                }
                println!("  Error: {e}");
                Err(CliError::ValidationFailed(format!("{label}: {e}")).into())
            }
        }
    }
}
