//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use ucoll_api::SortKeyEntry;

/// Plain text formatter - outputs one item per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_item(&mut self, item: &str) -> Result<()> {
        writeln!(self.writer, "{item}")?;
        Ok(())
    }

    fn format_sort_key(&mut self, entry: &SortKeyEntry) -> Result<()> {
        writeln!(self.writer, "{}\t{}", entry.text, entry.key)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
