//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use ucoll_api::dto::Metadata;
use ucoll_api::SortKeyEntry;

/// Markdown formatter - outputs items as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
    locale: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
            locale: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_item(&mut self, item: &str) -> Result<()> {
        self.item_count += 1;
        writeln!(self.writer, "{}. {}", self.item_count, item)?;
        Ok(())
    }

    fn format_sort_key(&mut self, entry: &SortKeyEntry) -> Result<()> {
        self.item_count += 1;
        writeln!(
            self.writer,
            "{}. {} `{}`",
            self.item_count, entry.text, entry.key
        )?;
        Ok(())
    }

    fn format_metadata(&mut self, metadata: &Metadata) -> Result<()> {
        self.locale = Some(metadata.locale.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        match &self.locale {
            Some(locale) => writeln!(
                self.writer,
                "*Total items: {} (locale: {locale})*",
                self.item_count
            )?,
            None => writeln!(self.writer, "*Total items: {}*", self.item_count)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
