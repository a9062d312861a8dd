//! Greedy chunk accumulation with merge-back

use std::sync::Arc;

use super::{split, tidy, ChunkSet, LengthBounds};
use crate::classifier::CharacterClassifier;
use crate::tokenize::Tokenizer;

/// Greedy bounded-length chunker
///
/// Tokens are appended to an accumulator until it reaches `max_len`, hits a
/// space or sentence end past `min_len`, or would overflow. Accumulators that
/// end short are merged back into the previous chunk. The result is tidied
/// and every chunk still longer than `max_len` is force-split.
///
/// A mark that opens an accumulator stays in it: merged back it keeps its
/// place, standing alone it is stripped by `tidy`.
#[derive(Clone)]
pub struct ChunkBuilder {
    classifier: Arc<dyn CharacterClassifier>,
    bounds: LengthBounds,
}

/// A chunk in the making
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    /// Codepoints in `text`
    len: usize,
    /// Whitespace seen after `text` and not yet committed
    pending: String,
    pending_len: usize,
    /// Whitespace separated this chunk from the previous one
    after_space: bool,
}

impl Accumulator {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn append(&mut self, token: &str, len: usize) {
        self.text.push_str(&self.pending);
        self.len += self.pending_len + len;
        self.pending.clear();
        self.pending_len = 0;
        self.text.push_str(token);
    }
}

/// Chunk texts before tidying
#[derive(Debug, Default)]
struct Pieces {
    texts: Vec<String>,
}

impl Pieces {
    fn push(&mut self, acc: Accumulator) {
        self.texts.push(acc.text);
    }

    /// Append a short accumulator to the previous piece when there is one
    fn merge_or_push(&mut self, acc: Accumulator, min_len: usize) {
        match self.texts.last_mut() {
            Some(prev) if acc.len < min_len => {
                if acc.after_space {
                    prev.push(' ');
                }
                prev.push_str(&acc.text);
            }
            _ => self.push(acc),
        }
    }
}

impl ChunkBuilder {
    pub fn new(classifier: Arc<dyn CharacterClassifier>, bounds: LengthBounds) -> Self {
        Self { classifier, bounds }
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Tokenize normalized text and chunk it
    pub fn chunk_text(&self, text: &str, tokenizer: &dyn Tokenizer) -> ChunkSet {
        self.build(tokenizer.tokenize(text))
    }

    /// Chunk a token stream
    pub fn build<'t, I>(&self, tokens: I) -> ChunkSet
    where
        I: IntoIterator<Item = &'t str>,
    {
        let pieces = self.accumulate(tokens);
        let tidied = pieces
            .texts
            .iter()
            .filter_map(|text| tidy(text, &*self.classifier));
        let set = split::enforce_max(tidied, self.bounds, &*self.classifier);

        log::debug!(
            "Built {} chunks ({} overlong) with bounds {}..={}",
            set.len(),
            set.overlong,
            self.bounds.min_len(),
            self.bounds.max_len()
        );
        set
    }

    fn accumulate<'t, I>(&self, tokens: I) -> Pieces
    where
        I: IntoIterator<Item = &'t str>,
    {
        let min_len = self.bounds.min_len();
        let max_len = self.bounds.max_len();

        let mut pieces = Pieces::default();
        let mut acc = Accumulator::default();
        // Whitespace seen while the accumulator was empty
        let mut saw_space = false;

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            let len = token.chars().count();

            if token.chars().all(char::is_whitespace) {
                // `acc.len` leaves out whitespace that is still pending
                if acc.is_empty() {
                    saw_space = true;
                } else if acc.len >= min_len {
                    pieces.push(std::mem::take(&mut acc));
                    saw_space = true;
                } else {
                    acc.pending.push_str(token);
                    acc.pending_len += len;
                }
                continue;
            }

            if !acc.is_empty() && acc.len + acc.pending_len + len > max_len {
                saw_space = acc.pending_len > 0;
                let full = std::mem::take(&mut acc);
                pieces.merge_or_push(full, min_len);
            }

            if acc.is_empty() {
                acc.after_space = saw_space;
                saw_space = false;
            }
            acc.append(token, len);

            let sentence_end = acc.len >= min_len && self.is_sentence_final_token(token);
            if sentence_end || acc.len >= max_len {
                pieces.push(std::mem::take(&mut acc));
            }
        }

        if !acc.is_empty() {
            pieces.merge_or_push(acc, min_len);
        }

        pieces
    }

    fn is_sentence_final_token(&self, token: &str) -> bool {
        let mut chars = token.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if self.classifier.is_sentence_final(c)
        )
    }
}

impl std::fmt::Debug for ChunkBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkBuilder")
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
