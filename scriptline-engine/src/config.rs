//! Pipeline configuration

use std::path::PathBuf;

use scriptline_core::LengthBounds;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// How input text is divided before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// The whole input is one document
    #[default]
    Document,
    /// Every line is normalized and chunked on its own; short lines are skipped
    Lines,
}

impl SegmentationMode {
    pub fn name(&self) -> &'static str {
        match self {
            SegmentationMode::Document => "document",
            SegmentationMode::Lines => "lines",
        }
    }
}

/// Where the script profile comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Embedded profile by code or name
    Embedded(String),
    /// Profile TOML on disk
    File(PathBuf),
}

impl Default for ScriptSource {
    fn default() -> Self {
        ScriptSource::Embedded("shn".to_string())
    }
}

/// Word segmentation used for the token filter and chunk assembly
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenizerChoice {
    /// Rule-based syllables
    #[default]
    Syllable,
    /// Longest match against a word list, one word per line
    Dictionary(PathBuf),
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub(crate) script: ScriptSource,
    pub(crate) bounds: LengthBounds,
    pub(crate) keep_digits: bool,
    pub(crate) mode: SegmentationMode,
    pub(crate) tokenizer: TokenizerChoice,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            script: ScriptSource::default(),
            bounds: LengthBounds::default(),
            keep_digits: true,
            mode: SegmentationMode::default(),
            tokenizer: TokenizerChoice::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    pub fn script(&self) -> &ScriptSource {
        &self.script
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn keep_digits(&self) -> bool {
        self.keep_digits
    }

    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    pub fn tokenizer(&self) -> &TokenizerChoice {
        &self.tokenizer
    }
}

/// Fluent builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    script: Option<ScriptSource>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    keep_digits: Option<bool>,
    mode: Option<SegmentationMode>,
    tokenizer: Option<TokenizerChoice>,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an embedded profile by code or name
    pub fn script(mut self, code: impl Into<String>) -> Self {
        self.script = Some(ScriptSource::Embedded(code.into()));
        self
    }

    /// Use a profile TOML file
    pub fn script_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = Some(ScriptSource::File(path.into()));
        self
    }

    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn keep_digits(mut self, keep: bool) -> Self {
        self.keep_digits = Some(keep);
        self
    }

    pub fn mode(mut self, mode: SegmentationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Segment words with a dictionary instead of syllable rules
    pub fn dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.tokenizer = Some(TokenizerChoice::Dictionary(path.into()));
        self
    }

    /// Build the configuration, rejecting unusable length bounds
    pub fn build(self) -> Result<PipelineConfig> {
        let defaults = PipelineConfig::default();

        let bounds = LengthBounds::new(
            self.min_len.unwrap_or(defaults.bounds.min_len()),
            self.max_len.unwrap_or(defaults.bounds.max_len()),
        )?;

        if let Some(ScriptSource::Embedded(code)) = &self.script {
            if code.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "script code must not be empty".into(),
                ));
            }
        }

        Ok(PipelineConfig {
            script: self.script.unwrap_or(defaults.script),
            bounds,
            keep_digits: self.keep_digits.unwrap_or(defaults.keep_digits),
            mode: self.mode.unwrap_or(defaults.mode),
            tokenizer: self.tokenizer.unwrap_or(defaults.tokenizer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::builder().build().unwrap();
        assert_eq!(config.bounds().min_len(), 20);
        assert_eq!(config.bounds().max_len(), 50);
        assert!(config.keep_digits());
        assert_eq!(config.mode(), SegmentationMode::Document);
        assert_eq!(config.script(), &ScriptSource::Embedded("shn".to_string()));
        assert_eq!(config.tokenizer(), &TokenizerChoice::Syllable);
    }

    #[test]
    fn test_overrides() {
        let config = PipelineConfig::builder()
            .min_len(5)
            .max_len(30)
            .keep_digits(false)
            .mode(SegmentationMode::Lines)
            .script_file("/tmp/toy.toml")
            .dictionary("/tmp/words.txt")
            .build()
            .unwrap();
        assert_eq!(config.bounds().min_len(), 5);
        assert_eq!(config.bounds().max_len(), 30);
        assert!(!config.keep_digits());
        assert_eq!(config.mode(), SegmentationMode::Lines);
        assert!(matches!(config.script(), ScriptSource::File(_)));
        assert!(matches!(config.tokenizer(), TokenizerChoice::Dictionary(_)));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = PipelineConfig::builder()
            .min_len(50)
            .max_len(20)
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(_)));
    }

    #[test]
    fn test_empty_script_code_rejected() {
        let err = PipelineConfig::builder().script(" ").build().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }
}
