//! Document processor: normalization and chunking of whole inputs

use std::sync::Arc;
use std::time::Instant;

use scriptline_core::{
    get_profile, Chunk, ChunkBuilder, DictionaryTokenizer, ScriptProfile, SyllableTokenizer,
    TextNormalizer, Tokenizer,
};
use serde::{Deserialize, Serialize};

use crate::config::{PipelineConfig, ScriptSource, SegmentationMode, TokenizerChoice};
use crate::error::Result;
use crate::input::Input;

/// A chunk with its position in the output sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedChunk {
    pub index: usize,
    pub text: String,
    /// Length in codepoints
    pub len: usize,
    pub overlong: bool,
}

/// Processing output with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub chunks: Vec<IndexedChunk>,
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Script profile code
    pub script: String,
    /// Tokenizer name
    pub tokenizer: String,
    /// Segmentation mode used
    pub mode: SegmentationMode,
    /// Codepoints read
    pub input_chars: usize,
    /// Codepoints left after normalization
    pub normalized_chars: usize,
    /// Input lines seen (lines mode only)
    pub lines_total: usize,
    /// Lines shorter than `min_len` after normalization (lines mode only)
    pub lines_skipped: usize,
    pub chunk_count: usize,
    pub overlong_chunks: usize,
    pub processing_time_ms: f64,
}

/// Normalizes and chunks inputs under one configuration
pub struct DocumentProcessor {
    config: PipelineConfig,
    profile: Arc<ScriptProfile>,
    normalizer: TextNormalizer,
    tokenizer: Arc<dyn Tokenizer>,
    builder: ChunkBuilder,
}

impl DocumentProcessor {
    /// Processor for the embedded Shan profile with default bounds
    pub fn new() -> Result<Self> {
        Self::with_config(PipelineConfig::default())
    }

    /// Resolve the profile and tokenizer named by the configuration
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        let profile = match config.script() {
            ScriptSource::Embedded(code) => get_profile(code)?,
            ScriptSource::File(path) => Arc::new(ScriptProfile::from_file(path)?),
        };

        let tokenizer: Arc<dyn Tokenizer> = match config.tokenizer() {
            TokenizerChoice::Syllable => Arc::new(SyllableTokenizer::new(Arc::clone(&profile))),
            TokenizerChoice::Dictionary(path) => {
                let dictionary = DictionaryTokenizer::from_file(Arc::clone(&profile), path)?;
                log::info!(
                    "Loaded {} dictionary words from {}",
                    dictionary.len(),
                    path.display()
                );
                Arc::new(dictionary)
            }
        };

        Ok(Self::from_parts(config, profile, tokenizer))
    }

    /// Build from an already resolved profile and tokenizer
    pub fn from_parts(
        config: PipelineConfig,
        profile: Arc<ScriptProfile>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        let normalizer = TextNormalizer::with_tokenizer(Arc::clone(&profile), Arc::clone(&tokenizer));
        let builder = ChunkBuilder::new(profile.clone(), config.bounds());

        log::debug!(
            "Processor ready: script={}, tokenizer={}, bounds={}..={}, mode={}",
            profile.code(),
            tokenizer.name(),
            config.bounds().min_len(),
            config.bounds().max_len(),
            config.mode().name()
        );

        Self {
            config,
            profile,
            normalizer,
            tokenizer,
            builder,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn profile(&self) -> &Arc<ScriptProfile> {
        &self.profile
    }

    /// Normalize text without chunking
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text, self.config.keep_digits())
    }

    /// Process input in the configured segmentation mode
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.into_text()?;
        Ok(self.process_text(&text))
    }

    /// Process a string in the configured segmentation mode
    pub fn process_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let mut metadata = ProcessingMetadata {
            script: self.profile.code().to_string(),
            tokenizer: self.tokenizer.name().to_string(),
            mode: self.config.mode(),
            input_chars: text.chars().count(),
            ..Default::default()
        };

        let mut chunks = Vec::new();
        match self.config.mode() {
            SegmentationMode::Document => {
                let normalized = self.normalize(text);
                metadata.normalized_chars = normalized.chars().count();
                self.chunk_into(&normalized, &mut chunks);
            }
            SegmentationMode::Lines => {
                let min_len = self.config.bounds().min_len();
                for line in text.lines() {
                    metadata.lines_total += 1;
                    let normalized = self.normalize(line);
                    let len = normalized.chars().count();
                    if len < min_len {
                        metadata.lines_skipped += 1;
                        continue;
                    }
                    metadata.normalized_chars += len;
                    self.chunk_into(&normalized, &mut chunks);
                }
                log::debug!(
                    "Skipped {} of {} lines shorter than {} characters",
                    metadata.lines_skipped,
                    metadata.lines_total,
                    min_len
                );
            }
        }

        metadata.chunk_count = chunks.len();
        metadata.overlong_chunks = chunks.iter().filter(|c| c.overlong).count();
        metadata.processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        if metadata.overlong_chunks > 0 {
            log::warn!(
                "{} of {} chunks exceed {} characters",
                metadata.overlong_chunks,
                metadata.chunk_count,
                self.config.bounds().max_len()
            );
        }

        Output { chunks, metadata }
    }

    fn chunk_into(&self, normalized: &str, out: &mut Vec<IndexedChunk>) {
        let set = self.builder.chunk_text(normalized, self.tokenizer.as_ref());
        for Chunk {
            text,
            len,
            overlong,
        } in set
        {
            out.push(IndexedChunk {
                index: out.len(),
                text,
                len,
                overlong,
            });
        }
    }
}

impl std::fmt::Debug for DocumentProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentProcessor")
            .field("config", &self.config)
            .field("script", &self.profile.code())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
