use crate::error::{HumanizeError, Result};

use super::{lower_char, upper_char, StringTransformer};

/// Capitalizes each space-separated word, keeping all-caps words as acronyms
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCase;

impl TitleCase {
    fn title_word(word: &str, out: &mut String) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return;
        };

        if word.chars().all(char::is_uppercase) {
            out.push_str(word);
            return;
        }

        out.push(upper_char(first));
        out.extend(chars.map(lower_char));
    }
}

impl StringTransformer for TitleCase {
    fn name(&self) -> &'static str {
        "TitleCase"
    }

    fn transform(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        for (i, word) in input.split(' ').enumerate() {
            if i > 0 {
                result.push(' ');
            }
            Self::title_word(word, &mut result);
        }
        result
    }

    // WHY: capitalizing words while keeping acronyms has no fixed-length form, so refuse outright
    fn transform_in_place(&self, _buffer: &mut [char]) -> Result<()> {
        Err(HumanizeError::UnsupportedInPlace {
            transformer: self.name(),
        })
    }

    fn supports_in_place(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(TitleCase.transform("INvalid caSEs arE corrected"), "Invalid Cases Are Corrected");
        assert_eq!(TitleCase.transform("lower case statement"), "Lower Case Statement");
        assert_eq!(TitleCase.transform("keep HTML as is"), "Keep HTML As Is");
        assert_eq!(TitleCase.transform("a b c"), "A B C");
    }

    #[test]
    fn test_title_case_preserves_spacing() {
        assert_eq!(TitleCase.transform(""), "");
        assert_eq!(TitleCase.transform(" leading"), " Leading");
        assert_eq!(TitleCase.transform("double  space"), "Double  Space");
    }

    #[test]
    fn test_title_case_idempotent() {
        let once = TitleCase.transform("the QUICK bRown fox 5th");
        assert_eq!(once, "The QUICK Brown Fox 5th");
        assert_eq!(TitleCase.transform(&once), once);
    }

    #[test]
    fn test_title_case_in_place_unsupported() {
        let mut buffer: Vec<char> = "some words".chars().collect();
        let err = TitleCase.transform_in_place(&mut buffer).unwrap_err();

        assert_eq!(err, HumanizeError::UnsupportedInPlace { transformer: "TitleCase" });
        assert_eq!(buffer.iter().collect::<String>(), "some words");
        assert!(!TitleCase.supports_in_place());
    }
}
