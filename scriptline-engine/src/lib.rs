//! Pipeline orchestration for OCR ground-truth generation
//!
//! This crate wires the core normalizer and chunker into a document
//! processor, and adds what a dataset run needs around it: input sources,
//! per-line corpus processing, seeded sampling, font scheduling and a
//! parallel batch renderer.

pub mod allocator;
pub mod batch;
pub mod config;
pub mod error;
pub mod fonts;
pub mod input;
pub mod processor;
pub mod render;
pub mod sampling;

// Re-export key types
pub use allocator::{gt_path, OutputAllocator};
pub use batch::{BatchRenderer, BatchReport, RenderFailure, RenderedLine};
pub use config::{
    PipelineConfig, PipelineConfigBuilder, ScriptSource, SegmentationMode, TokenizerChoice,
};
pub use error::{EngineError, RenderError, Result};
pub use fonts::{FontSchedule, DEFAULT_FONTS};
pub use input::Input;
pub use processor::{DocumentProcessor, IndexedChunk, Output, ProcessingMetadata};
pub use render::{LayoutParams, RenderJob, Renderer, Text2ImageRenderer};
pub use sampling::sample;

// Re-export from core for convenience
pub use scriptline_core::{embedded_codes, LengthBounds, ScriptProfile};
