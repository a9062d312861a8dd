//! Dictionary-driven word segmentation
//!
//! Greedy longest match over syllables: at each syllable the longest run of
//! following syllables that spells a known word becomes one token.
//! Unknown syllables fall back to single-syllable tokens.

use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use super::{SegmentKind, SyllableTokenizer, Tokenizer};
use crate::error::ConfigError;
use crate::script::ScriptProfile;

#[derive(Debug, Clone)]
pub struct DictionaryTokenizer {
    syllables: SyllableTokenizer,
    words: HashSet<String>,
    /// Longest dictionary entry, in syllables
    max_syllables: usize,
}

impl DictionaryTokenizer {
    /// Create from a word list
    pub fn new<I, S>(profile: Arc<ScriptProfile>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let syllables = SyllableTokenizer::new(profile);
        let mut max_syllables = 1;
        let mut set = HashSet::new();

        for word in words {
            let word: String = word.into();
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            max_syllables = max_syllables.max(syllables.spans(word).len());
            set.insert(word.to_string());
        }

        Self {
            syllables,
            words: set,
            max_syllables,
        }
    }

    /// Load a word list with one entry per line; `#` starts a comment line
    pub fn from_file(profile: Arc<ScriptProfile>, path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string);

        Ok(Self::new(profile, words))
    }

    /// Number of dictionary entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Longest match starting at syllable `i` within `run`
    fn longest_match(&self, text: &str, run: &[Range<usize>], i: usize) -> usize {
        let longest = self.max_syllables.min(run.len() - i);
        for n in (2..=longest).rev() {
            let candidate = &text[run[i].start..run[i + n - 1].end];
            if self.words.contains(candidate) {
                return n;
            }
        }
        1
    }

    fn push_run<'t>(&self, text: &'t str, run: &[Range<usize>], out: &mut Vec<&'t str>) {
        let mut i = 0;
        while i < run.len() {
            let n = self.longest_match(text, run, i);
            out.push(&text[run[i].start..run[i + n - 1].end]);
            i += n;
        }
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut tokens = Vec::new();
        let mut run: Vec<Range<usize>> = Vec::new();

        for (range, kind) in self.syllables.spans(text) {
            if kind == SegmentKind::Letter {
                run.push(range);
                continue;
            }
            self.push_run(text, &run, &mut tokens);
            run.clear();
            tokens.push(&text[range]);
        }
        self.push_run(text, &run, &mut tokens);

        tokens
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
