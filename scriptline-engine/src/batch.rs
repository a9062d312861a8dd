//! Parallel ground-truth rendering
//!
//! Every chunk becomes a `.gt.txt` file plus whatever the renderer writes
//! next to it. Jobs run on a fixed-size thread pool; one failing job never
//! stops its siblings.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::allocator::{gt_path, OutputAllocator};
use crate::error::{EngineError, RenderError, Result};
use crate::fonts::FontSchedule;
use crate::processor::IndexedChunk;
use crate::render::{RenderJob, Renderer};

/// A successfully rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Chunk index
    pub index: usize,
    pub font: String,
    pub gt_path: PathBuf,
    pub image_path: PathBuf,
}

/// A failed render job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFailure {
    /// Chunk index
    pub index: usize,
    pub font: String,
    pub error: String,
}

/// Outcome of a batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Successful jobs in chunk order
    pub rendered: Vec<RenderedLine>,
    /// Failed jobs in chunk order
    pub failures: Vec<RenderFailure>,
    pub elapsed_ms: f64,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.rendered.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders chunks on a rayon pool
pub struct BatchRenderer {
    renderer: Arc<dyn Renderer>,
    fonts: FontSchedule,
    allocator: OutputAllocator,
    threads: usize,
}

impl BatchRenderer {
    /// Batch writing into `allocator`'s directory with one thread per CPU
    pub fn new(renderer: Arc<dyn Renderer>, fonts: FontSchedule, allocator: OutputAllocator) -> Self {
        Self {
            renderer,
            fonts,
            allocator,
            threads: num_cpus::get(),
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Render every chunk
    pub fn run(&self, chunks: &[IndexedChunk]) -> Result<BatchReport> {
        self.run_with_progress(chunks, &|| {})
    }

    /// Render every chunk, calling `on_done` after each job
    pub fn run_with_progress(
        &self,
        chunks: &[IndexedChunk],
        on_done: &(dyn Fn() + Sync),
    ) -> Result<BatchReport> {
        if self.threads == 0 {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }
        fs::create_dir_all(self.allocator.dir()).map_err(|e| {
            EngineError::IoError(format!(
                "Failed to create output directory {:?}: {e}",
                self.allocator.dir()
            ))
        })?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        let start = Instant::now();
        let total = chunks.len();
        log::info!(
            "Rendering {total} lines with {} on {} threads",
            self.renderer.name(),
            self.threads
        );

        let outcomes: Vec<std::result::Result<RenderedLine, RenderFailure>> = pool.install(|| {
            chunks
                .par_iter()
                .enumerate()
                .map(|(position, chunk)| {
                    let font = self.fonts.font_for(position, total);
                    let outcome = self.render_one(chunk, font);
                    on_done();
                    outcome.map_err(|err| {
                        log::warn!("Failed to render chunk {}: {err}", chunk.index);
                        RenderFailure {
                            index: chunk.index,
                            font: font.to_string(),
                            error: err.to_string(),
                        }
                    })
                })
                .collect()
        });

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(line) => report.rendered.push(line),
                Err(failure) => report.failures.push(failure),
            }
        }
        report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        log::info!(
            "Rendered {} of {} lines in {:.1}ms",
            report.rendered.len(),
            report.total(),
            report.elapsed_ms
        );
        Ok(report)
    }

    fn render_one(&self, chunk: &IndexedChunk, font: &str) -> std::result::Result<RenderedLine, RenderError> {
        let output_base = self.allocator.allocate();
        let gt = gt_path(&output_base);
        fs::write(&gt, &chunk.text).map_err(|source| RenderError::Io {
            path: gt.clone(),
            source,
        })?;

        let job = RenderJob {
            text: chunk.text.clone(),
            font: font.to_string(),
            gt_path: gt.clone(),
            output_base,
        };

        match self.renderer.render(&job) {
            Ok(image_path) => Ok(RenderedLine {
                index: chunk.index,
                font: job.font,
                gt_path: gt,
                image_path,
            }),
            Err(err) => {
                // No image means the text would be an orphan in the dataset
                if let Err(e) = fs::remove_file(&gt) {
                    log::debug!("Could not remove {}: {e}", gt.display());
                }
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for BatchRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchRenderer")
            .field("renderer", &self.renderer.name())
            .field("fonts", &self.fonts)
            .field("allocator", &self.allocator)
            .field("threads", &self.threads)
            .finish()
    }
}
