//! File reading utilities

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CliError;
use scriptline_engine::Input;

/// Reads corpus files through the engine's UTF-8 decoding
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Input::from_file(path)
            .into_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// File stem used to name rendered lines
    pub fn stem(path: &Path) -> Option<String> {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("news.txt");

        let content = "ၵၢၼ်ၸွမ်း ၼႂ်းမိူင်း။\nပၢႆးမၢၵ်ႈ";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let err = FileReader::read_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.txt");
        fs::write(&file_path, "\u{FEFF}ၵၢၼ်").unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "ၵၢၼ်");
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_stem() {
        assert_eq!(
            FileReader::stem(Path::new("data/shn.training_text.txt")).as_deref(),
            Some("shn.training_text")
        );
        assert_eq!(FileReader::stem(Path::new("/")), None);
    }
}
