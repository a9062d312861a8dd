//! JSON output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;
use scriptline_engine::{IndexedChunk, ProcessingMetadata};

/// JSON formatter - outputs chunks as a JSON array
///
/// With metadata enabled the array moves under `"chunks"` and per-file
/// metadata is listed under `"files"`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<ChunkData>,
    files: Vec<FileMetadata>,
    include_metadata: bool,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Input file the chunk came from
    pub source: String,
    /// Position within that file's chunks
    pub index: usize,
    /// The chunk text
    pub text: String,
    /// Length in characters
    pub length: usize,
    pub overlong: bool,
}

/// Metadata of one processed file
#[derive(Debug, Serialize, Deserialize)]
pub struct FileMetadata {
    pub source: String,
    #[serde(flatten)]
    pub metadata: ProcessingMetadata,
}

#[derive(Serialize)]
struct Document<'a> {
    chunks: &'a [ChunkData],
    files: &'a [FileMetadata],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
            files: Vec::new(),
            include_metadata: false,
            pretty: true,
        }
    }

    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
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
    fn format_chunk(&mut self, source: &Path, chunk: &IndexedChunk) -> Result<()> {
        self.chunks.push(ChunkData {
            source: source.display().to_string(),
            index: chunk.index,
            text: chunk.text.clone(),
            length: chunk.len,
            overlong: chunk.overlong,
        });
        Ok(())
    }

    fn record_metadata(&mut self, source: &Path, metadata: &ProcessingMetadata) -> Result<()> {
        if self.include_metadata {
            self.files.push(FileMetadata {
                source: source.display().to_string(),
                metadata: metadata.clone(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let chunks = std::mem::take(&mut self.chunks);
        if self.include_metadata {
            let files = std::mem::take(&mut self.files);
            self.write_value(&Document {
                chunks: &chunks,
                files: &files,
            })?;
        } else {
            self.write_value(&chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
