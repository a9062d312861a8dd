//! Input sources
//!
//! Scraped corpora arrive as strings, files, downloaded bytes or streams.
//! Everything is decoded as UTF-8 with a leading byte-order mark removed.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

const BOM: char = '\u{FEFF}';

/// Where document text comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// A corpus file
    File(PathBuf),
    /// Undecoded UTF-8 bytes
    Bytes(Vec<u8>),
    /// A stream read to its end
    Reader(Box<dyn Read + Send>),
}

impl Input {
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short label for logs and error messages
    pub fn describe(&self) -> String {
        match self {
            Input::Text(text) => format!("text ({} chars)", text.chars().count()),
            Input::File(path) => format!("file {}", path.display()),
            Input::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Input::Reader(_) => "stream".to_string(),
        }
    }

    /// Read the whole input as a string
    pub fn into_text(self) -> Result<String> {
        let origin = self.describe();
        let text = match self {
            Input::Text(text) => text,
            Input::File(path) => {
                let bytes = fs::read(&path)
                    .map_err(|e| EngineError::IoError(format!("cannot read {origin}: {e}")))?;
                decode(bytes, &origin)?
            }
            Input::Bytes(bytes) => decode(bytes, &origin)?,
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| EngineError::IoError(format!("cannot read {origin}: {e}")))?;
                decode(bytes, &origin)?
            }
        };

        Ok(match text.strip_prefix(BOM) {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        EngineError::EncodingError(format!(
            "{origin} is not UTF-8 (first bad byte at offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Input({})", self.describe())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
