//! Compare command implementation

use super::{output_format, CollatorArgs};
use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left-hand string
    pub left: String,

    /// Right-hand string
    pub right: String,

    #[command(flatten)]
    pub collator: CollatorArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print -1, 0 or 1 instead of less, equal or greater
    #[arg(short, long)]
    pub numeric: bool,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self, settings: &CliConfig) -> Result<()> {
        let processor = self.collator.processor(settings)?;
        let comparison = processor.compare(&self.left, &self.right)?;
        log::debug!("{:?}", comparison);

        match output_format(self.format, settings) {
            OutputFormat::Json if settings.output.pretty_json => {
                println!("{}", serde_json::to_string_pretty(&comparison)?)
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&comparison)?),
            OutputFormat::Text | OutputFormat::Markdown if self.numeric => {
                println!("{}", comparison.sign())
            }
            OutputFormat::Text => println!("{}", comparison.ordering),
            OutputFormat::Markdown => println!(
                "`{}` is **{}** `{}`",
                comparison.left, comparison.ordering, comparison.right
            ),
        }

        Ok(())
    }
}
