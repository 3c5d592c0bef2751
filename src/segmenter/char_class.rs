// General-category tests for single characters, backed by the same regex engine as the
// word patterns so both segmenters agree on what a letter or digit is

use regex_automata::meta::Regex;

use crate::error::{HumanizeError, Result};

/// Compiled single-character classifiers
#[derive(Debug)]
pub struct CharClasses {
    upper: Regex,
    lower: Regex,
    digit: Regex,
    word: Regex,
}

impl CharClasses {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            upper: compile_class(r"\p{Lu}")?,
            lower: compile_class(r"\p{Ll}")?,
            digit: compile_class(r"\p{Nd}")?,
            // letters, non-spacing marks, decimal digits and connector punctuation
            word: compile_class(r"[\p{L}\p{Mn}\p{Nd}\p{Pc}]")?,
        })
    }

    /// Uppercase letter (`Lu`), excluding symbols that only carry the uppercase property
    pub fn is_upper_letter(&self, ch: char) -> bool {
        // WHY: identifiers are mostly ASCII, where the category is known without a regex search
        if ch.is_ascii() {
            return ch.is_ascii_uppercase();
        }
        matches_char(&self.upper, ch)
    }

    /// Lowercase letter (`Ll`)
    pub fn is_lower_letter(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return ch.is_ascii_lowercase();
        }
        matches_char(&self.lower, ch)
    }

    /// Decimal digit (`Nd`); superscripts, fractions and letter numbers are not digits
    pub fn is_decimal_digit(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return ch.is_ascii_digit();
        }
        matches_char(&self.digit, ch)
    }

    pub fn is_word_char(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return ch.is_ascii_alphanumeric() || ch == '_';
        }
        matches_char(&self.word, ch)
    }
}

fn compile_class(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| HumanizeError::Pattern {
        reason: e.to_string(),
    })
}

fn matches_char(class: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    let encoded: &str = ch.encode_utf8(&mut buf);
    class.is_match(encoded)
}
