//! Character classification for normalization and chunking

/// Punctuation marks the chunker treats as soft split points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Ends a clause (Shan `၊`)
    ClauseFinal,
    /// Ends a sentence (Shan `။`)
    SentenceFinal,
}

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letter, vowel sign or tone mark of the target script
    ScriptLetter,
    /// Clause or sentence punctuation of the target script
    ScriptPunct(Mark),
    /// Digit (kept only when the digit policy allows it)
    Digit,
    /// Any Unicode whitespace
    Space,
    /// Everything else
    Other,
}

impl CharClass {
    /// Whether a character of this class may appear in normalized text
    #[inline]
    pub fn is_allowed(self, keep_digits: bool) -> bool {
        match self {
            CharClass::ScriptLetter | CharClass::ScriptPunct(_) | CharClass::Space => true,
            CharClass::Digit => keep_digits,
            CharClass::Other => false,
        }
    }
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;

    /// Check if character is a clause-final or sentence-final mark
    fn is_mark(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharClass::ScriptPunct(_))
    }

    /// Check if character is a sentence-final mark
    fn is_sentence_final(&self, ch: char) -> bool {
        self.classify(ch) == CharClass::ScriptPunct(Mark::SentenceFinal)
    }

    /// Check if character may appear in normalized text
    fn is_allowed(&self, ch: char, keep_digits: bool) -> bool {
        self.classify(ch).is_allowed(keep_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classifier over ASCII, for exercising the default methods
    struct AsciiClassifier;

    impl CharacterClassifier for AsciiClassifier {
        fn classify(&self, ch: char) -> CharClass {
            match ch {
                ',' => CharClass::ScriptPunct(Mark::ClauseFinal),
                '.' => CharClass::ScriptPunct(Mark::SentenceFinal),
                c if c.is_whitespace() => CharClass::Space,
                c if c.is_ascii_digit() => CharClass::Digit,
                c if c.is_ascii_alphabetic() => CharClass::ScriptLetter,
                _ => CharClass::Other,
            }
        }
    }

    #[test]
    fn test_default_helpers() {
        let classifier = AsciiClassifier;
        assert!(classifier.is_mark(','));
        assert!(classifier.is_mark('.'));
        assert!(!classifier.is_mark('a'));
        assert!(classifier.is_sentence_final('.'));
        assert!(!classifier.is_sentence_final(','));
    }

    #[test]
    fn test_digit_policy() {
        let classifier = AsciiClassifier;
        assert!(classifier.is_allowed('7', true));
        assert!(!classifier.is_allowed('7', false));
        assert!(classifier.is_allowed(' ', false));
        assert!(!classifier.is_allowed('#', true));
    }
}
