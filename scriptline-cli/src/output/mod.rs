//! Output formatting module

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use scriptline_engine::{IndexedChunk, ProcessingMetadata};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk of `source`
    fn format_chunk(&mut self, source: &Path, chunk: &IndexedChunk) -> Result<()>;

    /// Record the processing metadata of `source`
    fn record_metadata(&mut self, _source: &Path, _metadata: &ProcessingMetadata) -> Result<()> {
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with lengths and flags
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One ground-truth line per chunk",
            OutputFormat::Json => "JSON array with chunk lengths and overlong flags",
            OutputFormat::Markdown => "Numbered Markdown list with a chunk total",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(
            JsonFormatter::new(writer)
                .with_metadata(config.include_metadata)
                .pretty(config.pretty_json),
        ),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use scriptline_engine::IndexedChunk;

    /// Cloneable in-memory writer
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn chunk(index: usize, text: &str, overlong: bool) -> IndexedChunk {
        IndexedChunk {
            index,
            text: text.to_string(),
            len: text.chars().count(),
            overlong,
        }
    }
}
