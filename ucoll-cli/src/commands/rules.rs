//! Rules command implementation

use super::CollatorArgs;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;

/// Arguments for the rules command
#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(flatten)]
    pub collator: CollatorArgs,
}

impl RulesArgs {
    /// Execute the rules command
    ///
    /// Locales without tailoring print nothing.
    pub fn execute(&self, settings: &CliConfig) -> Result<()> {
        let processor = self.collator.processor(settings)?;
        let rules = processor.collator().rules();
        if rules.is_empty() {
            log::info!("collator has no tailoring rules");
        } else {
            println!("{rules}");
        }
        Ok(())
    }
}
