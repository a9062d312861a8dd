//! Length-bounded chunking of normalized text
//!
//! Chunks are assembled greedily from tokens, short tails are merged back
//! into their predecessor and anything still too long is cut at the nearest
//! space or sentence end.

mod builder;
mod split;

pub use builder::ChunkBuilder;

use serde::{Deserialize, Serialize};

use crate::classifier::CharacterClassifier;
use crate::error::ConfigError;
use crate::normalize::collapse_whitespace;

/// Minimum and maximum chunk length in codepoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    min_len: usize,
    max_len: usize,
}

impl LengthBounds {
    pub const DEFAULT_MIN_LEN: usize = 20;
    pub const DEFAULT_MAX_LEN: usize = 50;

    /// Requires `min_len < max_len`
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 || min_len >= max_len {
            return Err(ConfigError::InvalidBounds { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }
}

/// One training line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// Length in codepoints
    pub len: usize,
    /// Longer than `max_len` with no usable cut point
    pub overlong: bool,
}

impl Chunk {
    fn new(text: String, overlong: bool) -> Self {
        let len = text.chars().count();
        Self { text, len, overlong }
    }
}

/// Ordered chunks of one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSet {
    pub chunks: Vec<Chunk>,
    /// Number of chunks flagged overlong
    pub overlong: usize,
}

impl ChunkSet {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Chunk texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    fn push(&mut self, chunk: Chunk) {
        if chunk.overlong {
            self.overlong += 1;
        }
        self.chunks.push(chunk);
    }
}

impl IntoIterator for ChunkSet {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

/// Collapse whitespace, trim and strip the leading marks
///
/// Returns `None` when nothing is left.
pub(crate) fn tidy(text: &str, classifier: &dyn CharacterClassifier) -> Option<String> {
    let collapsed = collapse_whitespace(text.chars());
    let rest = collapsed
        .trim()
        .trim_start_matches(|c: char| c.is_whitespace() || classifier.is_mark(c));

    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::shan;

    #[test]
    fn test_bounds_validation() {
        assert!(LengthBounds::new(20, 50).is_ok());
        assert!(LengthBounds::new(0, 1).is_ok());
        assert!(matches!(
            LengthBounds::new(50, 50),
            Err(ConfigError::InvalidBounds {
                min_len: 50,
                max_len: 50
            })
        ));
        assert!(LengthBounds::new(60, 50).is_err());
        assert!(LengthBounds::new(0, 0).is_err());
    }

    #[test]
    fn test_default_bounds() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.min_len(), 20);
        assert_eq!(bounds.max_len(), 50);
    }

    #[test]
    fn test_tidy() {
        let profile = shan();
        assert_eq!(tidy("  ၵၢၼ်   ၸွမ်း ", &*profile).as_deref(), Some("ၵၢၼ် ၸွမ်း"));
        assert_eq!(tidy("။ ၵၢၼ်", &*profile).as_deref(), Some("ၵၢၼ်"));
        // A doubled mark goes as a whole
        assert_eq!(tidy("၊။ ၵ", &*profile).as_deref(), Some("ၵ"));
        assert_eq!(tidy("ၵ။။", &*profile).as_deref(), Some("ၵ။။"));
        assert_eq!(tidy(" ။ ", &*profile), None);
        assert_eq!(tidy("", &*profile), None);
    }

    #[test]
    fn test_chunk_counts_codepoints() {
        let chunk = Chunk::new("ၵၢၼ်".to_string(), false);
        assert_eq!(chunk.len, 4);
        assert!(chunk.text.len() > chunk.len);
    }
}
