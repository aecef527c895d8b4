//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use ucoll_api::Input;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file as collation input, either one item per line or a JSON array
    pub fn read_input(path: &Path, json: bool) -> Result<Input> {
        let text = Self::read_text(path)?;
        Ok(if json {
            Input::from_json(text)
        } else {
            Input::from_text(text)
        })
    }

    /// Read all of standard input as collation input
    pub fn read_stdin(json: bool) -> Result<Input> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        Ok(if json {
            Input::from_json(text)
        } else {
            Input::from_text(text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.txt");

        let content = "blåbær\nsyltetøy";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::read_text(path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x62, 0xe5, 0x0a]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_input_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.txt");
        fs::write(&file_path, "ø\næ\n").unwrap();

        let items = FileReader::read_input(&file_path, false)
            .unwrap()
            .read_items()
            .unwrap();
        assert_eq!(items, ["ø", "æ"]);
    }

    #[test]
    fn test_read_input_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.json");
        fs::write(&file_path, r#"["ø", "æ"]"#).unwrap();

        let items = FileReader::read_input(&file_path, true)
            .unwrap()
            .read_items()
            .unwrap();
        assert_eq!(items, ["ø", "æ"]);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let items = FileReader::read_input(&file_path, false)
            .unwrap()
            .read_items()
            .unwrap();
        assert!(items.is_empty());
    }
}
