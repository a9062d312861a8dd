//! Ground-truth text normalization
//!
//! Turns scraped text into script-restricted text: symbols are removed,
//! punctuation spacing and orthographic variants are fixed, and every token
//! that still carries a foreign character is dropped.

use std::sync::Arc;

use crate::classifier::{CharClass, CharacterClassifier};
use crate::script::ScriptProfile;
use crate::tokenize::{SyllableTokenizer, Tokenizer};

/// Rewrite-and-filter normalizer for one script profile
///
/// `normalize` is idempotent: feeding its output back in returns it
/// unchanged.
#[derive(Clone)]
pub struct TextNormalizer {
    profile: Arc<ScriptProfile>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl TextNormalizer {
    /// Normalizer using syllable tokenization for the token filter
    pub fn new(profile: Arc<ScriptProfile>) -> Self {
        let tokenizer = Arc::new(SyllableTokenizer::new(Arc::clone(&profile)));
        Self { profile, tokenizer }
    }

    /// Normalizer with a custom tokenizer for the token filter
    pub fn with_tokenizer(profile: Arc<ScriptProfile>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { profile, tokenizer }
    }

    pub fn profile(&self) -> &Arc<ScriptProfile> {
        &self.profile
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Normalize raw text; an empty result means nothing usable was left
    pub fn normalize(&self, raw: &str, keep_digits: bool) -> String {
        let text: String = raw.chars().filter(|&c| !self.profile.is_symbol(c)).collect();
        let text = self.space_marks(&text);
        let text = self.profile.collapse_length_marks(&text).into_owned();
        let text = self.profile.apply_reorders(text);
        let text = self.restrict_to_block(&text);
        let text = self.drop_foreign_tokens(&text, keep_digits);
        self.canonicalize(&text, keep_digits)
    }

    /// No whitespace before a mark, exactly one separator after it
    fn space_marks(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            out.push(ch);
            if !self.profile.is_mark(ch) {
                continue;
            }
            // Move the mark left over any whitespace before it
            out.pop();
            let kept = out.trim_end().len();
            out.truncate(kept);
            out.push(ch);

            if matches!(chars.peek(), Some(next) if !next.is_whitespace()) {
                out.push(' ');
            }
        }

        out
    }

    /// Keep the target block plus anything the profile classifies
    fn restrict_to_block(&self, text: &str) -> String {
        let kept = text
            .chars()
            .filter(|&c| self.profile.in_block(c) || self.profile.classify(c) != CharClass::Other);
        collapse_whitespace(kept)
    }

    fn drop_foreign_tokens(&self, text: &str, keep_digits: bool) -> String {
        let tokens = self.tokenizer.tokenize(text);
        let total = tokens.len();

        let mut out = String::with_capacity(text.len());
        let mut dropped = 0usize;
        for token in tokens {
            if token.chars().all(|c| self.profile.is_allowed(c, keep_digits)) {
                out.push_str(token);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            log::trace!(
                "Dropped {dropped} of {total} tokens ({} tokenizer)",
                self.tokenizer.name()
            );
        }
        out
    }

    /// Removals can bring marks, length marks or digraph halves together,
    /// so the local rewrites run once more on the filtered text
    fn canonicalize(&self, text: &str, keep_digits: bool) -> String {
        let filtered: String = text
            .chars()
            .filter(|&c| self.profile.is_allowed(c, keep_digits))
            .collect();
        let spaced = self.space_marks(&filtered);
        let collapsed = self.profile.collapse_length_marks(&spaced).into_owned();
        let reordered = self.profile.apply_reorders(collapsed);

        collapse_whitespace(reordered.chars()).trim().to_string()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("script", &self.profile.code())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

/// Map every whitespace run to a single ASCII space
pub(crate) fn collapse_whitespace(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    let mut in_space = false;
    for ch in chars {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::shan;

    fn normalize(text: &str) -> String {
        TextNormalizer::new(shan()).normalize(text, true)
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "ၵၢၼ်ၸွမ်း ၼႂ်းမိူင်း၊ ပၢႆးမၢၵ်ႈ။";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_symbols_removed() {
        assert_eq!(normalize("ၵၢၼ်😀ၸွမ်း"), "ၵၢၼ်ၸွမ်း");
        assert_eq!(normalize("ၵၢၼ်\u{200D}\u{FE0F}"), "ၵၢၼ်");
    }

    #[test]
    fn test_mark_spacing() {
        assert_eq!(normalize("ၵၢၼ်၊ၸွမ်း"), "ၵၢၼ်၊ ၸွမ်း");
        assert_eq!(normalize("ၵၢၼ်  ။ၸွမ်း"), "ၵၢၼ်။ ၸွမ်း");
        assert_eq!(normalize("ၵၢၼ် ။"), "ၵၢၼ်။");
    }

    #[test]
    fn test_length_marks_collapse() {
        assert_eq!(normalize("ၵႉႉႉ"), "ၵႉ");
        assert_eq!(normalize("ၵႉႉ"), "ၵႉ");
    }

    #[test]
    fn test_digraphs_reordered() {
        assert_eq!(normalize("ပႆၢး"), "ပၢႆး");
        assert_eq!(normalize("ေတ"), "တေ");
    }

    #[test]
    fn test_latin_removed() {
        assert_eq!(normalize("ၵၢၼ် hello, world ၸွမ်း"), "ၵၢၼ် ၸွမ်း");
    }

    #[test]
    fn test_foreign_words_dropped_whole() {
        // Burmese ကို shares the block but is not Shan
        assert_eq!(normalize("ၵၢၼ် ကို ၸွမ်း"), "ၵၢၼ် ၸွမ်း");
    }

    #[test]
    fn test_digit_policy() {
        let normalizer = TextNormalizer::new(shan());
        assert_eq!(normalizer.normalize("ၵၢၼ် 12 ႑႒", true), "ၵၢၼ် 12 ႑႒");
        assert_eq!(normalizer.normalize("ၵၢၼ် 12 ႑႒", false), "ၵၢၼ်");
    }

    #[test]
    fn test_foreign_only_input_is_empty() {
        assert_eq!(normalize("😀 hello 🎉"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize("  ၵၢၼ်\n\n\tၸွမ်း  "), "ၵၢၼ် ၸွမ်း");
    }

    #[test]
    fn test_removal_rejoins_length_marks() {
        // Dropping the Latin letter brings the two length marks together
        assert_eq!(normalize("ၵႉxႉ"), "ၵႉ");
    }

    #[test]
    fn test_idempotent_on_noisy_text() {
        let raw = "ၵၢၼ်😀 ၊ၸွမ်းႉႉ abc ကို ပႆၢး။ 12ၼႂ်း";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_debug_names_parts() {
        let normalizer = TextNormalizer::new(shan());
        let debug = format!("{normalizer:?}");
        assert!(debug.contains("shn"));
        assert!(debug.contains("syllable"));
    }
}
