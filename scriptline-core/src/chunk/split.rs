//! Forced splitting of chunks longer than `max_len`

use std::collections::VecDeque;

use super::{tidy, Chunk, ChunkSet, LengthBounds};
use crate::classifier::CharacterClassifier;

/// Validate every chunk against `max_len`, cutting the long ones
///
/// A remainder goes back to the front of the queue and is validated in turn.
/// Chunks without a usable cut are kept whole and flagged overlong.
pub(crate) fn enforce_max<I>(
    chunks: I,
    bounds: LengthBounds,
    classifier: &dyn CharacterClassifier,
) -> ChunkSet
where
    I: IntoIterator<Item = String>,
{
    let mut queue: VecDeque<String> = chunks.into_iter().collect();
    let mut set = ChunkSet::default();

    while let Some(text) = queue.pop_front() {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= bounds.max_len() {
            set.push(Chunk::new(text, false));
            continue;
        }

        match find_cut(&chars, bounds, classifier) {
            Some(cut) => {
                let head: String = chars[..cut].iter().collect();
                let tail: String = chars[cut..].iter().collect();
                if let Some(head) = tidy(&head, classifier) {
                    set.push(Chunk::new(head, false));
                }
                if let Some(tail) = tidy(&tail, classifier) {
                    queue.push_front(tail);
                }
            }
            None => {
                log::warn!(
                    "Chunk of {} characters has no split point between {} and {}; keeping it whole",
                    chars.len(),
                    bounds.min_len() + 1,
                    bounds.max_len()
                );
                set.push(Chunk::new(text, true));
            }
        }
    }

    set
}

/// Nearest valid cut at or below `max_len` and above `min_len`
///
/// A cut at `c` is valid when `chars[c]` is whitespace or `chars[c - 1]` is
/// a sentence-final mark. Cuts leaving at least `min_len` characters behind
/// win over nearer ones that do not.
fn find_cut(
    chars: &[char],
    bounds: LengthBounds,
    classifier: &dyn CharacterClassifier,
) -> Option<usize> {
    let lowest = bounds.min_len() + 1;
    let highest = bounds.max_len().min(chars.len().saturating_sub(1));

    let mut nearest = None;
    for cut in (lowest..=highest).rev() {
        let at_space = chars[cut].is_whitespace();
        if !at_space && !classifier.is_sentence_final(chars[cut - 1]) {
            continue;
        }

        let remainder = chars.len() - cut - usize::from(at_space);
        if remainder >= bounds.min_len() {
            return Some(cut);
        }
        nearest.get_or_insert(cut);
    }

    nearest
}
