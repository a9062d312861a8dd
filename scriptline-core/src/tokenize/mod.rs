//! Tokenizers
//!
//! A tokenizer splits normalized text into slices that concatenate back to
//! the input exactly. The chunker assembles chunks from these slices and
//! never splits one.

pub mod dictionary;
pub mod syllable;

pub use dictionary::DictionaryTokenizer;
pub use syllable::SyllableTokenizer;

/// Concatenation-preserving text segmentation
pub trait Tokenizer: Send + Sync {
    /// Split text into ordered tokens whose concatenation is `text`
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

/// Segment category used by the built-in tokenizers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    Letter,
    Mark,
    Digit,
    Space,
    Other,
}
