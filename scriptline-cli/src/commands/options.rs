//! Flags shared by the commands that run the text pipeline

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{CliConfig, ProcessingConfig};
use crate::error::CliError;
use crate::script_source::ScriptSelection;
use scriptline_engine::{DocumentProcessor, PipelineConfig, SegmentationMode};

/// Input, normalization and chunking options
#[derive(Debug, Clone, Args)]
pub struct PipelineArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Minimum chunk length in characters
    #[arg(long, value_name = "CHARS")]
    pub min_len: Option<usize>,

    /// Maximum chunk length in characters
    #[arg(long, value_name = "CHARS")]
    pub max_len: Option<usize>,

    /// Remove ASCII and script digits
    #[arg(long)]
    pub no_digits: bool,

    /// Normalize and chunk every input line on its own, skipping short lines
    #[arg(long)]
    pub lines: bool,

    /// Built-in script profile code
    #[arg(long, value_name = "CODE", conflicts_with = "script_config")]
    pub script: Option<String>,

    /// External script profile (TOML)
    #[arg(long, value_name = "FILE")]
    pub script_config: Option<PathBuf>,

    /// Word list for dictionary segmentation, one word per line
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PipelineArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let init = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
            if init.is_err() {
                log::debug!("Logger already initialized");
            }
        }
    }

    /// Load the configuration file named by `--config`
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.config.as_deref())
    }

    pub fn script_selection(&self, processing: &ProcessingConfig) -> ScriptSelection {
        ScriptSelection::resolve(
            self.script.as_deref(),
            self.script_config.as_ref(),
            &processing.script,
        )
    }

    /// Merge flags over the configuration file
    pub fn pipeline_config(&self, processing: &ProcessingConfig) -> Result<PipelineConfig> {
        let mode = if self.lines {
            SegmentationMode::Lines
        } else {
            processing.mode
        };

        let mut builder = self
            .script_selection(processing)
            .apply(PipelineConfig::builder())
            .min_len(self.min_len.unwrap_or(processing.min_len))
            .max_len(self.max_len.unwrap_or(processing.max_len))
            .keep_digits(processing.keep_digits && !self.no_digits)
            .mode(mode);
        if let Some(dictionary) = self.dictionary.as_ref().or(processing.dictionary.as_ref()) {
            builder = builder.dictionary(dictionary.clone());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Build the document processor, loading profile and dictionary
    pub fn processor(&self, config: &CliConfig) -> Result<DocumentProcessor> {
        let pipeline = self.pipeline_config(&config.processing)?;
        let selection = self.script_selection(&config.processing);
        log::info!("Script profile: {}", selection.display_name());

        DocumentProcessor::with_config(pipeline)
            .with_context(|| format!("Failed to prepare pipeline ({})", selection.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PipelineArgs {
        PipelineArgs {
            input: vec!["news.txt".to_string()],
            min_len: None,
            max_len: None,
            no_digits: false,
            lines: false,
            script: None,
            script_config: None,
            dictionary: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let processing = ProcessingConfig {
            min_len: 10,
            max_len: 30,
            mode: SegmentationMode::Document,
            ..Default::default()
        };
        let args = PipelineArgs {
            max_len: Some(40),
            no_digits: true,
            lines: true,
            ..args()
        };

        let config = args.pipeline_config(&processing).unwrap();
        assert_eq!(config.bounds().min_len(), 10);
        assert_eq!(config.bounds().max_len(), 40);
        assert!(!config.keep_digits());
        assert_eq!(config.mode(), SegmentationMode::Lines);
    }

    #[test]
    fn test_invalid_bounds_are_config_errors() {
        let args = PipelineArgs {
            min_len: Some(50),
            max_len: Some(20),
            ..args()
        };
        let err = args
            .pipeline_config(&ProcessingConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_script_fails_with_context() {
        let args = PipelineArgs {
            script: Some("xx".to_string()),
            ..args()
        };
        let err = args.processor(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Built-in: xx"));
    }
}
