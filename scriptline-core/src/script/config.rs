//! Configuration structures and validation
//!
//! This module defines the TOML schema for script profiles.

use serde::{Deserialize, Serialize};

/// Root script configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    pub block: Block,
    pub letters: CharSet,
    pub punctuation: Punctuation,
    #[serde(default)]
    pub digits: CharSet,
    #[serde(default)]
    pub syllables: Syllables,
    #[serde(default)]
    pub rewrites: Rewrites,
    #[serde(default)]
    pub symbols: CharSet,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Target Unicode block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub start: char,
    pub end: char,
}

/// Set of characters given as single characters and inclusive ranges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharSet {
    #[serde(default)]
    pub chars: Vec<char>,
    #[serde(default)]
    pub ranges: Vec<CharRange>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CharRange {
    pub from: char,
    pub to: char,
}

/// Clause and sentence punctuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Punctuation {
    pub clause_final: char,
    pub sentence_final: char,
}

/// Syllable segmentation data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Syllables {
    #[serde(default)]
    pub chars: Vec<char>,
    #[serde(default)]
    pub initials: Vec<CharRange>,
    pub killer: Option<char>,
    pub stacker: Option<char>,
}

/// Orthographic rewrite rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rewrites {
    pub length_mark: Option<char>,
    #[serde(default)]
    pub reorder: Vec<Reorder>,
}

/// Literal substring replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reorder {
    pub from: String,
    pub to: String,
}

impl CharSet {
    /// Whether the set has no members at all
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.ranges.is_empty()
    }

    fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch) || self.ranges.iter().any(|r| r.from <= ch && ch <= r.to)
    }
}

impl ScriptConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Script code must not be empty".to_string());
        }

        if self.block.start > self.block.end {
            return Err(format!(
                "Block start U+{:04X} is after block end U+{:04X}",
                self.block.start as u32, self.block.end as u32
            ));
        }

        if self.letters.is_empty() {
            return Err("No letters defined".to_string());
        }

        let all_ranges = self
            .letters
            .ranges
            .iter()
            .chain(&self.digits.ranges)
            .chain(&self.symbols.ranges)
            .chain(&self.syllables.initials);
        for range in all_ranges {
            if range.from > range.to {
                return Err(format!(
                    "Range U+{:04X}..U+{:04X} is reversed",
                    range.from as u32, range.to as u32
                ));
            }
        }

        let marks = &self.punctuation;
        if marks.clause_final == marks.sentence_final {
            return Err("Clause-final and sentence-final marks must differ".to_string());
        }
        for mark in [marks.clause_final, marks.sentence_final] {
            if self.letters.contains(mark) || self.digits.contains(mark) {
                return Err(format!(
                    "Punctuation mark U+{:04X} is also a letter or digit",
                    mark as u32
                ));
            }
        }

        if self
            .rewrites
            .reorder
            .iter()
            .any(|r| r.from.is_empty() || r.from == r.to)
        {
            return Err("Reorder rules need a non-empty pattern that differs from its replacement".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "tst"
name = "Test"

[block]
start = "a"
end = "z"

[letters]
ranges = [{ from = "a", to = "z" }]

[punctuation]
clause_final = ","
sentence_final = "."
"#;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.digits.is_empty());
        assert!(config.rewrites.reorder.is_empty());
        assert!(config.rewrites.length_mark.is_none());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let mut config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        config.letters.ranges.push(CharRange { from: 'z', to: 'a' });
        let err = config.validate().unwrap_err();
        assert!(err.contains("reversed"));
    }

    #[test]
    fn test_identical_marks_rejected() {
        let mut config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        config.punctuation.sentence_final = ',';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mark_inside_letters_rejected() {
        let mut config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        config.punctuation.clause_final = 'q';
        let err = config.validate().unwrap_err();
        assert!(err.contains("also a letter"));
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        config.metadata.code = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_noop_reorder_rejected() {
        let mut config: ScriptConfig = toml::from_str(MINIMAL).unwrap();
        config.rewrites.reorder.push(Reorder {
            from: "ab".to_string(),
            to: "ab".to_string(),
        });
        assert!(config.validate().is_err());
    }
}
