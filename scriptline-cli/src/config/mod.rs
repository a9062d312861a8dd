//! Configuration module
//!
//! Every table and field is optional; explicit command-line flags override
//! whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;
use scriptline_engine::{LayoutParams, SegmentationMode, DEFAULT_FONTS};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {e}", path.display())).into()
        })
    }

    /// Load the file if one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Embedded script code
    pub script: String,

    /// Minimum chunk length in characters
    pub min_len: usize,

    /// Maximum chunk length in characters
    pub max_len: usize,

    /// Keep ASCII and script digits
    pub keep_digits: bool,

    /// Segmentation mode
    pub mode: SegmentationMode,

    /// Word list for dictionary segmentation
    pub dictionary: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            script: "shn".to_string(),
            min_len: 20,
            max_len: 50,
            keep_digits: true,
            mode: SegmentationMode::Document,
            dictionary: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Include processing metadata in JSON output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Rendering-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fonts spread evenly across each batch
    pub fonts: Vec<String>,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Renderer program
    pub text2image: PathBuf,

    /// Seed for line sampling
    pub seed: u64,

    /// `text2image` page layout
    pub layout: LayoutParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
            worker_threads: 0,
            text2image: PathBuf::from("text2image"),
            seed: 0,
            layout: LayoutParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.script, "shn");
        assert_eq!(config.processing.min_len, 20);
        assert_eq!(config.processing.max_len, 50);
        assert_eq!(config.render.fonts.len(), DEFAULT_FONTS.len());
        assert_eq!(config.render.layout, LayoutParams::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"
[processing]
max_len = 40
mode = "lines"

[render]
fonts = ["Shan"]

[render.layout]
exposure = -1
"#,
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.max_len, 40);
        assert_eq!(config.processing.min_len, 20);
        assert_eq!(config.processing.mode, SegmentationMode::Lines);
        assert_eq!(config.render.fonts, vec!["Shan"]);
        assert_eq!(config.render.layout.exposure, -1);
        assert_eq!(config.render.layout.leading, 32);
        assert_eq!(config.output.default_format, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[processing\nmin_len = ").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = CliConfig::load_or_default(Some(Path::new("/nonexistent/scriptline.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
