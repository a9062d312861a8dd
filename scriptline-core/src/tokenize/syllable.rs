//! Rule-based syllable segmentation

use std::ops::Range;
use std::sync::Arc;

use super::{SegmentKind, Tokenizer};
use crate::classifier::{CharClass, CharacterClassifier};
use crate::script::ScriptProfile;

/// Splits script letters into syllables and everything else into runs
///
/// Whitespace, digits and foreign characters form maximal runs; every
/// clause or sentence mark is a token of its own. Inside a run of script
/// letters a syllable starts at each initial consonant that is neither
/// killed by the following character nor stacked under the previous one.
#[derive(Debug, Clone)]
pub struct SyllableTokenizer {
    profile: Arc<ScriptProfile>,
}

impl SyllableTokenizer {
    pub fn new(profile: Arc<ScriptProfile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Arc<ScriptProfile> {
        &self.profile
    }

    fn kind(&self, ch: char) -> SegmentKind {
        match self.profile.classify(ch) {
            CharClass::ScriptLetter => SegmentKind::Letter,
            CharClass::ScriptPunct(_) => SegmentKind::Mark,
            CharClass::Digit => SegmentKind::Digit,
            CharClass::Space => SegmentKind::Space,
            // Foreign letters of the same block still form syllables so that
            // a foreign word is tokenized whole
            CharClass::Other if self.profile.in_block(ch) => SegmentKind::Letter,
            CharClass::Other => SegmentKind::Other,
        }
    }

    fn starts_syllable(&self, prev: char, cur: char, next: Option<char>) -> bool {
        if !self.profile.is_syllable_initial(cur) {
            return false;
        }
        if self.profile.stacker() == Some(prev) {
            return false;
        }
        !matches!((next, self.profile.killer()), (Some(n), Some(k)) if n == k)
    }

    /// Byte spans of every segment with its category
    pub(crate) fn spans(&self, text: &str) -> Vec<(Range<usize>, SegmentKind)> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let Some(&(_, first)) = chars.first() else {
            return Vec::new();
        };

        let mut spans = Vec::new();
        let mut start = 0;
        let mut start_kind = self.kind(first);

        for i in 1..chars.len() {
            let (offset, cur) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, c)| c);
            let kind = self.kind(cur);

            let split = match (start_kind, kind) {
                (SegmentKind::Mark, _) | (_, SegmentKind::Mark) => true,
                (a, b) if a != b => true,
                (SegmentKind::Letter, SegmentKind::Letter) => self.starts_syllable(prev, cur, next),
                _ => false,
            };

            if split {
                spans.push((start..offset, start_kind));
                start = offset;
                start_kind = kind;
            }
        }
        spans.push((start..text.len(), start_kind));

        spans
    }
}

impl Tokenizer for SyllableTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.spans(text)
            .into_iter()
            .map(|(range, _)| &text[range])
            .collect()
    }

    fn name(&self) -> &'static str {
        "syllable"
    }
}
