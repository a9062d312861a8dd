//! Script-restricted text normalization and length-bounded chunking
//!
//! This crate turns noisy scraped text into clean training lines for OCR
//! ground truth. Text is first normalized against a script profile (symbols
//! stripped, punctuation spacing fixed, orthographic variants unified,
//! foreign words dropped) and then partitioned into chunks whose length in
//! codepoints stays within configured bounds.
//!
//! # Architecture
//!
//! - **Script profiles**: immutable character sets and rewrite rules loaded
//!   from TOML, shared as `Arc<ScriptProfile>`
//! - **Classifier**: one enum-returning function per character
//! - **Tokenizers**: concatenation-preserving segmentation
//! - **Normalizer** and **chunk builder**: pure, single-threaded passes
//!
//! # Example
//!
//! ```rust
//! use scriptline_core::{get_profile, ChunkBuilder, LengthBounds, SyllableTokenizer, TextNormalizer};
//! use std::sync::Arc;
//!
//! let profile = get_profile("shn").unwrap();
//! let normalizer = TextNormalizer::new(Arc::clone(&profile));
//! let tokenizer = SyllableTokenizer::new(Arc::clone(&profile));
//! let builder = ChunkBuilder::new(profile, LengthBounds::new(5, 20).unwrap());
//!
//! let text = normalizer.normalize("ၵၢၼ်ၸွမ်း 😀 ၼႂ်းမိူင်း။ပၢႆးမၢၵ်ႈ", true);
//! assert_eq!(text, "ၵၢၼ်ၸွမ်း ၼႂ်းမိူင်း။ ပၢႆးမၢၵ်ႈ");
//!
//! let chunks = builder.chunk_text(&text, &tokenizer);
//! assert!(chunks.iter().all(|c| c.len <= 20));
//! ```

pub mod chunk;
pub mod classifier;
pub mod error;
pub mod normalize;
pub mod script;
pub mod tokenize;

pub use chunk::{Chunk, ChunkBuilder, ChunkSet, LengthBounds};
pub use classifier::{CharClass, CharacterClassifier, Mark};
pub use error::{ConfigError, CoreError, Result};
pub use normalize::TextNormalizer;
pub use script::{embedded_codes, get_profile, ScriptConfig, ScriptProfile, SHAN_PROFILE_TOML};
pub use tokenize::{DictionaryTokenizer, SyllableTokenizer, Tokenizer};
