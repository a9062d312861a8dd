//! Plain text output formatter

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use super::OutputFormatter;
use scriptline_engine::IndexedChunk;

/// Plain text formatter - outputs one chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, _source: &Path, chunk: &IndexedChunk) -> Result<()> {
        writeln!(self.writer, "{}", chunk.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{chunk, SharedBuffer};

    #[test]
    fn test_one_line_per_chunk() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let source = Path::new("news.txt");

        formatter
            .format_chunk(source, &chunk(0, "ၵၢၼ်ၸွမ်း ၼႂ်းမိူင်း၊", false))
            .unwrap();
        formatter.format_chunk(source, &chunk(1, "ပၢႆးမၢၵ်ႈ", false)).unwrap();
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "ၵၢၼ်ၸွမ်း ၼႂ်းမိူင်း၊\nပၢႆးမၢၵ်ႈ\n");
    }
}
