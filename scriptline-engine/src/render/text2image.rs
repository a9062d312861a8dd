//! Tesseract `text2image` adapter

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::{RenderJob, Renderer};
use crate::error::RenderError;

/// Page layout passed to `text2image`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub max_pages: u32,
    pub strip_unrenderable_words: bool,
    pub leading: u32,
    pub xsize: u32,
    pub ysize: u32,
    pub char_spacing: f32,
    pub exposure: i32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_pages: 1,
            strip_unrenderable_words: true,
            leading: 32,
            xsize: 3600,
            ysize: 480,
            char_spacing: 1.0,
            exposure: 0,
        }
    }
}

/// Renders through the `text2image` program
#[derive(Debug, Clone)]
pub struct Text2ImageRenderer {
    program: PathBuf,
    fonts_dir: PathBuf,
    unicharset: Option<PathBuf>,
    layout: LayoutParams,
}

impl Text2ImageRenderer {
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from("text2image"),
            fonts_dir: fonts_dir.into(),
            unicharset: None,
            layout: LayoutParams::default(),
        }
    }

    /// Use a program other than `text2image` from `PATH`
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_unicharset(mut self, path: impl Into<PathBuf>) -> Self {
        self.unicharset = Some(path.into());
        self
    }

    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for one job
    pub fn args(&self, job: &RenderJob) -> Vec<String> {
        let layout = &self.layout;
        let mut args = vec![
            format!("--font={}", job.font),
            format!("--fonts_dir={}", self.fonts_dir.display()),
            format!("--text={}", job.gt_path.display()),
            format!("--outputbase={}", job.output_base.display()),
            format!("--max_pages={}", layout.max_pages),
        ];
        if layout.strip_unrenderable_words {
            args.push("--strip_unrenderable_words".to_string());
        }
        args.extend([
            format!("--leading={}", layout.leading),
            format!("--xsize={}", layout.xsize),
            format!("--ysize={}", layout.ysize),
            format!("--char_spacing={:.1}", layout.char_spacing),
            format!("--exposure={}", layout.exposure),
        ]);
        if let Some(unicharset) = &self.unicharset {
            args.push(format!("--unicharset_file={}", unicharset.display()));
        }
        args
    }

    fn image_path(output_base: &Path) -> PathBuf {
        let mut name = output_base.as_os_str().to_os_string();
        name.push(".tif");
        PathBuf::from(name)
    }
}

impl Renderer for Text2ImageRenderer {
    fn render(&self, job: &RenderJob) -> Result<PathBuf, RenderError> {
        let output = Command::new(&self.program)
            .args(self.args(job))
            .output()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let image = Self::image_path(&job.output_base);
        if !image.exists() {
            return Err(RenderError::MissingOutput(image));
        }
        Ok(image)
    }

    fn name(&self) -> &str {
        "text2image"
    }
}
