//! Output formatting module

use anyhow::Result;
use std::io::Write;
use ucoll_api::dto::Metadata;
use ucoll_api::SortKeyEntry;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single item
    fn format_item(&mut self, item: &str) -> Result<()>;

    /// Format and output a string with its sort key
    fn format_sort_key(&mut self, entry: &SortKeyEntry) -> Result<()>;

    /// Record run metadata; formatters that cannot show it ignore it
    fn format_metadata(&mut self, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one item per line
    Text,
    /// JSON array of items
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Pick the flag value, else the configured default, else text
    pub fn resolve(flag: Option<OutputFormat>, configured: &str) -> Self {
        use clap::ValueEnum;

        flag.or_else(|| OutputFormat::from_str(configured, true).ok())
            .unwrap_or(OutputFormat::Text)
    }
}

/// Destination writer shared by all formatters
pub type Sink = Box<dyn Write + Send + Sync>;

/// Build a formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Sink,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_flag() {
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Markdown), "json"),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_resolve_uses_configured_default() {
        assert_eq!(OutputFormat::resolve(None, "JSON"), OutputFormat::Json);
    }

    #[test]
    fn test_resolve_falls_back_to_text() {
        assert_eq!(OutputFormat::resolve(None, "yaml"), OutputFormat::Text);
    }
}
