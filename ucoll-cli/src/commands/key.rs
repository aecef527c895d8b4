//! Key command implementation

use super::{open_output, output_format, CollatorArgs};
use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use ucoll_api::Input;

/// Arguments for the key command
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Strings to compute sort keys for
    #[arg(required = true)]
    pub text: Vec<String>,

    #[command(flatten)]
    pub collator: CollatorArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl KeyArgs {
    /// Execute the key command
    pub fn execute(&self, settings: &CliConfig) -> Result<()> {
        let processor = self.collator.processor(settings)?;
        let entries = processor.sort_keys(Input::from_items(self.text.iter().cloned()))?;

        let mut formatter = create_formatter(
            output_format(self.format, settings),
            open_output(self.output.as_deref())?,
            settings.output.pretty_json,
        );
        for entry in &entries {
            formatter.format_sort_key(entry)?;
        }
        formatter.finish()
    }
}
