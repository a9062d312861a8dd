//! Process command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::options::PipelineArgs;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.pipeline.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.pipeline.load_config()?;
        let files = resolve_patterns(&self.pipeline.input)?;
        let processor = self.pipeline.processor(&config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, writer, &config.output);

        let mut progress = ProgressReporter::new(self.pipeline.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let mut chunk_count = 0;
        let mut overlong = 0;
        for path in &files {
            let text = FileReader::read_text(path)?;
            let output = processor.process_text(&text);

            if output.chunks.is_empty() {
                log::warn!(
                    "No {} text left in {} after normalization",
                    processor.profile().name(),
                    path.display()
                );
            }
            for chunk in &output.chunks {
                formatter.format_chunk(path, chunk)?;
            }
            formatter.record_metadata(path, &output.metadata)?;

            chunk_count += output.metadata.chunk_count;
            overlong += output.metadata.overlong_chunks;
            progress.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Wrote {chunk_count} chunks ({overlong} overlong) from {} files as {}",
            files.len(),
            format.name()
        );
        Ok(())
    }
}
