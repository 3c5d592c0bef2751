// Compiled matchers shared by every allocating segmentation call
// Built once per rule set and only ever read afterwards

use regex_automata::{meta::Regex, Input};
use tracing::{debug, info};

use super::CharClasses;
use crate::error::{HumanizeError, Result};
use crate::rules::HumanizeRules;

/// Word alternatives in priority order: capitalized word, digit run, uppercase run, caseless letters.
///
/// The uppercase run is greedy here; the look-ahead that keeps the next word's leading
/// capital out of it is applied by `PatternSegmenter`.
const WORD_PATTERN: &str = r"\p{Lu}?\p{Ll}+|[0-9]+\p{Ll}*|\p{Lu}+|\p{Lo}+";

/// Compiled word and free-standing separator matchers, plus the character classes both
/// segmenters test against
#[derive(Debug)]
pub struct WordPatterns {
    words: Regex,
    freestanding: Regex,
    classes: CharClasses,
}

impl WordPatterns {
    /// Compile the matchers for `rules`
    pub fn compile(rules: &HumanizeRules) -> Result<Self> {
        info!("Compiling word patterns");

        let words = Regex::new(WORD_PATTERN).map_err(|e| HumanizeError::Pattern {
            reason: e.to_string(),
        })?;

        let freestanding_pattern = freestanding_pattern(&rules.separators);
        let freestanding = Regex::new(&freestanding_pattern).map_err(|e| HumanizeError::Pattern {
            reason: e.to_string(),
        })?;

        debug!(pattern = %freestanding_pattern, "Compiled free-standing separator pattern");

        Ok(Self {
            words,
            freestanding,
            classes: CharClasses::compile()?,
        })
    }

    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Leftmost word match starting at or after byte offset `at`
    pub fn find_word(&self, text: &str, at: usize) -> Option<(usize, usize)> {
        let input = Input::new(text).range(at..);
        self.words.search(&input).map(|m| (m.start(), m.end()))
    }

    /// True when a separator touches whitespace on either side
    pub fn has_freestanding_separator(&self, text: &str) -> bool {
        self.freestanding.is_match(text)
    }
}

/// `\s[seps]|[seps]\s`, with every separator hex-escaped
fn freestanding_pattern(separators: &[char]) -> String {
    let class: String = separators
        .iter()
        .map(|c| format!(r"\x{{{:X}}}", u32::from(*c)))
        .collect();
    format!(r"\s[{class}]|[{class}]\s")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_patterns() -> WordPatterns {
        WordPatterns::compile(&HumanizeRules::default()).unwrap()
    }

    #[test]
    fn test_freestanding_pattern_text() {
        assert_eq!(freestanding_pattern(&['_', '-']), r"\s[\x{5F}\x{2D}]|[\x{5F}\x{2D}]\s");
    }

    #[test]
    fn test_freestanding_detection() {
        let patterns = default_patterns();
        assert!(patterns.has_freestanding_separator("Some - thing"));
        assert!(patterns.has_freestanding_separator("trailing_ space"));
        assert!(patterns.has_freestanding_separator("leading\t-tab"));
        assert!(!patterns.has_freestanding_separator("snake_case_word"));
        assert!(!patterns.has_freestanding_separator("kebab-case word"));
    }

    #[test]
    fn test_custom_separator() {
        let rules = HumanizeRules {
            separators: vec!['.'],
            ..HumanizeRules::default()
        };
        let patterns = WordPatterns::compile(&rules).unwrap();
        assert!(patterns.has_freestanding_separator("end . start"));
        assert!(!patterns.has_freestanding_separator("end - start"));
    }

    #[test]
    fn test_find_word_alternatives() {
        let patterns = default_patterns();
        assert_eq!(patterns.find_word("Pascal", 0), Some((0, 6)));
        assert_eq!(patterns.find_word("5th", 0), Some((0, 3)));
        assert_eq!(patterns.find_word("HTMLParser", 0), Some((0, 5)));
        assert_eq!(patterns.find_word("日本語", 0), Some((0, 9)));
        assert_eq!(patterns.find_word("?!", 0), None);
        assert_eq!(patterns.find_word("ab Cd", 2), Some((3, 5)));
    }
}
