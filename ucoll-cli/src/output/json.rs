//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use ucoll_api::dto::Metadata;
use ucoll_api::SortKeyEntry;

/// JSON formatter - buffers everything and writes one document on finish
///
/// Items become an array of strings, sort keys an array of `{text, key}`
/// objects. With metadata the array is wrapped as `{"items": ..., "metadata": ...}`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
    metadata: Option<Metadata>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Record {
    Item(String),
    SortKey(SortKeyEntry),
}

#[derive(Serialize)]
struct Document<'a> {
    items: &'a [Record],
    metadata: &'a Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
            metadata: None,
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_item(&mut self, item: &str) -> Result<()> {
        self.records.push(Record::Item(item.to_string()));
        Ok(())
    }

    fn format_sort_key(&mut self, entry: &SortKeyEntry) -> Result<()> {
        self.records.push(Record::SortKey(entry.clone()));
        Ok(())
    }

    fn format_metadata(&mut self, metadata: &Metadata) -> Result<()> {
        self.metadata = Some(metadata.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let records = std::mem::take(&mut self.records);
        match self.metadata.take() {
            Some(metadata) => self.write_value(&Document {
                items: &records,
                metadata: &metadata,
            })?,
            None => self.write_value(&records)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
