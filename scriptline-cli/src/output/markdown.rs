//! Markdown output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::OutputFormatter;
use scriptline_engine::IndexedChunk;

/// Markdown formatter - outputs chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    overlong: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            overlong: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, _source: &Path, chunk: &IndexedChunk) -> Result<()> {
        self.chunk_count += 1;
        if chunk.overlong {
            self.overlong += 1;
            writeln!(
                self.writer,
                "{}. {} *(overlong: {})*",
                self.chunk_count, chunk.text, chunk.len
            )?;
        } else {
            writeln!(self.writer, "{}. {}", self.chunk_count, chunk.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        if self.overlong > 0 {
            writeln!(self.writer, "*Overlong chunks: {}*", self.overlong)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
