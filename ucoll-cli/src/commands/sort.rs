//! Sort command implementation

use super::{open_output, output_format, CollatorArgs};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use ucoll_api::{CollationProcessor, Input};

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub collator: CollatorArgs,

    /// Inputs are JSON arrays of strings instead of lines
    #[arg(long)]
    pub json: bool,

    /// Sort through precomputed sort keys
    #[arg(long)]
    pub by_key: bool,

    /// Reverse the output order
    #[arg(long)]
    pub reverse: bool,

    /// Drop items that collate equal to the previous one
    #[arg(short, long)]
    pub unique: bool,

    /// Include run metadata (JSON and Markdown only)
    #[arg(long)]
    pub metadata: bool,
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self, settings: &CliConfig, quiet: bool) -> Result<()> {
        log::info!("Starting collation");

        let mut builder = self.collator.builder(settings)?;
        if self.by_key {
            builder = builder.sort_by_key(true);
        }
        let processor = CollationProcessor::with_config(builder.build()?)?;

        let input = self.read_input(quiet)?;
        let output = processor.process(input)?;
        log::info!(
            "Sorted {} items in {}ms ({})",
            output.metadata.item_count,
            output.metadata.processing_time_ms,
            output.metadata.strategy
        );

        let mut items = output.items;
        if self.unique {
            let collator = processor.collator();
            items.dedup_by(|current, previous| collator.equal(current, previous));
        }
        if self.reverse {
            items.reverse();
        }

        let format = output_format(self.format, settings);
        let mut formatter = create_formatter(
            format,
            open_output(self.output.as_deref())?,
            settings.output.pretty_json,
        );
        for item in &items {
            formatter.format_item(item)?;
        }
        if self.metadata {
            formatter.format_metadata(&output.metadata)?;
        }
        formatter.finish()
    }

    /// Gather items from every input file, or from stdin
    fn read_input(&self, quiet: bool) -> Result<Input> {
        if self.input.is_empty() {
            log::debug!("reading items from stdin");
            return FileReader::read_stdin(self.json);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to read", files.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let mut items = Vec::new();
        for path in &files {
            items.extend(FileReader::read_input(path, self.json)?.read_items()?);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();

        Ok(Input::Items(items))
    }
}
