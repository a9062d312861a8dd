//! Runtime implementation of script profiles
//!
//! Bridges the TOML configuration and the hot-path classifier interface.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::config::{CharRange, ScriptConfig};
use super::tables::{ClassTable, RangeSet};
use crate::classifier::{CharClass, CharacterClassifier, Mark};
use crate::error::ConfigError;

/// Immutable character sets and rewrite rules for one script
#[derive(Debug, Clone)]
pub struct ScriptProfile {
    code: String,
    name: String,

    /// Runtime tables
    classes: ClassTable,
    block: (char, char),
    clause_final: char,
    sentence_final: char,
    symbols: RangeSet,
    initials: RangeSet,
    killer: Option<char>,
    stacker: Option<char>,

    /// Rewrite rules
    length_run: Option<Regex>,
    length_mark: Option<char>,
    reorder: Vec<(String, String)>,
}

impl ScriptProfile {
    /// Create from configuration
    pub fn from_config(config: &ScriptConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::InvalidProfile)?;

        let mut classes = ClassTable::new(config.block.start, config.block.end);
        for ch in RangeSet::from_char_set(&config.letters).chars() {
            classes.insert(ch, CharClass::ScriptLetter);
        }
        for ch in RangeSet::from_char_set(&config.digits).chars() {
            classes.insert(ch, CharClass::Digit);
        }
        let punctuation = &config.punctuation;
        classes.insert(
            punctuation.clause_final,
            CharClass::ScriptPunct(Mark::ClauseFinal),
        );
        classes.insert(
            punctuation.sentence_final,
            CharClass::ScriptPunct(Mark::SentenceFinal),
        );

        let syllables = &config.syllables;
        let initials = RangeSet::from_ranges(
            syllables
                .chars
                .iter()
                .map(|&c| CharRange { from: c, to: c })
                .chain(syllables.initials.iter().copied()),
        );

        let length_mark = config.rewrites.length_mark;
        let length_run = length_mark
            .map(|mark| Regex::new(&format!("{}{{2,}}", regex::escape(&mark.to_string()))))
            .transpose()?;

        let reorder = config
            .rewrites
            .reorder
            .iter()
            .map(|r| (r.from.clone(), r.to.clone()))
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            classes,
            block: (config.block.start, config.block.end),
            clause_final: punctuation.clause_final,
            sentence_final: punctuation.sentence_final,
            symbols: RangeSet::from_char_set(&config.symbols),
            initials,
            killer: syllables.killer,
            stacker: syllables.stacker,
            length_run,
            length_mark,
            reorder,
        })
    }

    /// Parse and build from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ScriptConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Script code (e.g. `shn`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable script name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clause_final(&self) -> char {
        self.clause_final
    }

    pub fn sentence_final(&self) -> char {
        self.sentence_final
    }

    /// Inclusive bounds of the target Unicode block
    pub fn block(&self) -> (char, char) {
        self.block
    }

    #[inline]
    pub fn in_block(&self, ch: char) -> bool {
        self.block.0 <= ch && ch <= self.block.1
    }

    /// Whether the character belongs to the emoji/symbol filter
    #[inline]
    pub fn is_symbol(&self, ch: char) -> bool {
        self.symbols.contains(ch)
    }

    /// Whether a syllable may start with this character
    #[inline]
    pub fn is_syllable_initial(&self, ch: char) -> bool {
        self.initials.contains(ch)
    }

    /// Mark that kills the inherent vowel of the preceding consonant
    pub fn killer(&self) -> Option<char> {
        self.killer
    }

    /// Mark that stacks the following consonant under the preceding one
    pub fn stacker(&self) -> Option<char> {
        self.stacker
    }

    pub fn length_mark(&self) -> Option<char> {
        self.length_mark
    }

    /// Collapse runs of two or more length marks into one
    pub fn collapse_length_marks<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match (&self.length_run, self.length_mark) {
            (Some(run), Some(mark)) => {
                let mut buf = [0u8; 4];
                let single: &str = mark.encode_utf8(&mut buf);
                run.replace_all(text, single)
            }
            _ => Cow::Borrowed(text),
        }
    }

    /// Apply the digraph reordering rules until none of them matches
    ///
    /// A rule set whose replacements keep producing matches stops after one
    /// pass per character of input.
    pub fn apply_reorders(&self, text: String) -> String {
        let mut text = text;
        let limit = text.chars().count() + 1;
        for _ in 0..limit {
            let mut changed = false;
            for (from, to) in &self.reorder {
                if text.contains(from.as_str()) {
                    text = text.replace(from.as_str(), to);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        text
    }

    /// Number of configured reorder rules
    pub fn reorder_rule_count(&self) -> usize {
        self.reorder.len()
    }
}

impl CharacterClassifier for ScriptProfile {
    #[inline]
    fn classify(&self, ch: char) -> CharClass {
        self.classes.get(ch)
    }

    #[inline]
    fn is_mark(&self, ch: char) -> bool {
        ch == self.clause_final || ch == self.sentence_final
    }

    #[inline]
    fn is_sentence_final(&self, ch: char) -> bool {
        ch == self.sentence_final
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::shan;

    #[test]
    fn test_shan_letters() {
        let profile = shan();
        for ch in ['ၵ', 'ၶ', 'ႁ', 'မ', 'ဢ', 'ိ', 'ႆ', 'ႉ', '်'] {
            assert_eq!(profile.classify(ch), CharClass::ScriptLetter, "{ch:?}");
        }
    }

    #[test]
    fn test_shan_marks_and_digits() {
        let profile = shan();
        assert_eq!(
            profile.classify('၊'),
            CharClass::ScriptPunct(Mark::ClauseFinal)
        );
        assert_eq!(
            profile.classify('။'),
            CharClass::ScriptPunct(Mark::SentenceFinal)
        );
        assert_eq!(profile.classify('3'), CharClass::Digit);
        assert_eq!(profile.classify('႑'), CharClass::Digit);
        assert!(profile.is_sentence_final('။'));
        assert!(!profile.is_sentence_final('၊'));
    }

    #[test]
    fn test_shan_rejects_foreign_characters() {
        let profile = shan();
        // Burmese-only letter inside the Myanmar block
        assert_eq!(profile.classify('က'), CharClass::Other);
        assert_eq!(profile.classify('a'), CharClass::Other);
        assert_eq!(profile.classify('😀'), CharClass::Other);
        assert_eq!(profile.classify(' '), CharClass::Space);
    }

    #[test]
    fn test_block_and_symbols() {
        let profile = shan();
        assert!(profile.in_block('က'));
        assert!(profile.in_block('႟'));
        assert!(!profile.in_block('a'));
        assert!(profile.is_symbol('😀'));
        assert!(profile.is_symbol('\u{200D}'));
        assert!(profile.is_symbol('─'));
        assert!(!profile.is_symbol('ၵ'));
        assert!(!profile.is_symbol('a'));
    }

    #[test]
    fn test_collapse_length_marks() {
        let profile = shan();
        assert_eq!(profile.collapse_length_marks("ၵႉႉႉ"), "ၵႉ");
        assert_eq!(profile.collapse_length_marks("ၵႉ ႉ"), "ၵႉ ႉ");
        assert!(matches!(
            profile.collapse_length_marks("ၵၢ"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_apply_reorders_reaches_fixpoint() {
        let profile = shan();
        assert_eq!(profile.apply_reorders("ႆၢ".to_string()), "ၢႆ");
        assert_eq!(profile.apply_reorders("ေတ".to_string()), "တေ");
        // A single replacement pass would leave a new "ႆၢ" behind
        assert_eq!(profile.apply_reorders("ႆႆၢၢ".to_string()), "ၢၢႆႆ");
    }

    #[test]
    fn test_syllable_initials() {
        let profile = shan();
        assert!(profile.is_syllable_initial('ၵ'));
        assert!(profile.is_syllable_initial('မ'));
        assert!(!profile.is_syllable_initial('ိ'));
        assert_eq!(profile.killer(), Some('်'));
        assert_eq!(profile.stacker(), Some('္'));
    }
}
