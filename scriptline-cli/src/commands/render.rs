//! Render command implementation

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use super::options::PipelineArgs;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use scriptline_engine::{
    sample, BatchRenderer, FontSchedule, OutputAllocator, Text2ImageRenderer,
};

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Directory receiving the .gt.txt and image files
    #[arg(long, value_name = "DIR", required = true)]
    pub output_dir: PathBuf,

    /// Directory containing the fonts
    #[arg(long, value_name = "DIR", required = true)]
    pub fonts_dir: PathBuf,

    /// Font to render with (repeatable; default: from config)
    #[arg(long = "font", value_name = "NAME")]
    pub fonts: Vec<String>,

    /// Render a seeded random sample of N chunks
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Sampling seed (default: from config, else 0)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of render threads (default: number of CPUs)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Path to the text2image program
    #[arg(long, value_name = "PATH")]
    pub text2image: Option<PathBuf>,

    /// Unicharset passed to text2image
    #[arg(long, value_name = "FILE")]
    pub unicharset: Option<PathBuf>,

    /// Output name prefix (default: stem of the first input file)
    #[arg(long, value_name = "NAME")]
    pub stem: Option<String>,

    /// Write the batch report as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        self.pipeline.init_logging();
        log::debug!("Arguments: {:?}", self);

        if self.threads == Some(0) {
            return Err(CliError::ConfigError("Thread count must be greater than 0".into()).into());
        }

        let config = self.pipeline.load_config()?;
        let files = resolve_patterns(&self.pipeline.input)?;
        let processor = self.pipeline.processor(&config)?;

        let mut chunks = Vec::new();
        for path in &files {
            let text = FileReader::read_text(path)?;
            chunks.extend(processor.process_text(&text).chunks);
        }

        let available = chunks.len();
        if let Some(count) = self.count {
            let seed = self.seed.unwrap_or(config.render.seed);
            chunks = sample(chunks, count, seed);
            log::info!("Sampled {} of {available} chunks with seed {seed}", chunks.len());
        }
        for (position, chunk) in chunks.iter_mut().enumerate() {
            chunk.index = position;
        }

        if chunks.is_empty() {
            println!("Nothing to render: no chunks left after normalization");
            return Ok(());
        }

        let fonts = if self.fonts.is_empty() {
            config.render.fonts.clone()
        } else {
            self.fonts.clone()
        };
        let schedule =
            FontSchedule::new(fonts).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let program = self
            .text2image
            .clone()
            .unwrap_or_else(|| config.render.text2image.clone());
        let mut renderer = Text2ImageRenderer::new(self.fonts_dir.clone())
            .with_program(program)
            .with_layout(config.render.layout.clone());
        if let Some(unicharset) = &self.unicharset {
            renderer = renderer.with_unicharset(unicharset.clone());
        }

        let stem = self
            .stem
            .clone()
            .or_else(|| files.first().and_then(|path| FileReader::stem(path)))
            .unwrap_or_else(|| "line".to_string());
        let threads = self
            .threads
            .or((config.render.worker_threads > 0).then_some(config.render.worker_threads))
            .unwrap_or_else(num_cpus::get);

        let batch = BatchRenderer::new(
            Arc::new(renderer),
            schedule,
            OutputAllocator::new(self.output_dir.clone(), stem),
        )
        .with_threads(threads);

        let mut progress = ProgressReporter::new(self.pipeline.quiet);
        progress.init_jobs(chunks.len() as u64);
        let report = batch
            .run_with_progress(&chunks, &|| progress.job_completed())
            .map_err(|e| CliError::RenderError(e.to_string()))?;
        progress.finish();

        if let Some(path) = &self.report {
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
        }

        for failure in &report.failures {
            eprintln!(
                "✗ line {} ({}): {}",
                failure.index, failure.font, failure.error
            );
        }
        println!(
            "Rendered {} of {} lines into {}",
            report.rendered.len(),
            report.total(),
            self.output_dir.display()
        );

        if report.rendered.is_empty() {
            return Err(CliError::RenderError(format!(
                "none of {} lines could be rendered",
                report.total()
            ))
            .into());
        }
        Ok(())
    }
}
