//! Rendering chunks into line images
//!
//! The engine only decides what to render and where; drawing the image is
//! delegated to a [`Renderer`].

mod text2image;

pub use text2image::{LayoutParams, Text2ImageRenderer};

use std::path::PathBuf;

use crate::error::RenderError;

/// One line to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Ground-truth text
    pub text: String,
    /// Font family name
    pub font: String,
    /// File already holding `text`
    pub gt_path: PathBuf,
    /// Output path without extension
    pub output_base: PathBuf,
}

/// Image renderer collaborator
pub trait Renderer: Send + Sync {
    /// Render one job and return the image path
    fn render(&self, job: &RenderJob) -> Result<PathBuf, RenderError>;

    /// Short name for diagnostics
    fn name(&self) -> &str;
}
