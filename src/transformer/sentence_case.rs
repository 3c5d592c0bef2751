use crate::error::Result;

use super::{upper_char, StringTransformer};

/// Uppercases the first character and leaves the rest alone
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceCase;

impl StringTransformer for SentenceCase {
    fn name(&self) -> &'static str {
        "SentenceCase"
    }

    fn transform(&self, input: &str) -> String {
        let mut chars = input.chars();
        match chars.next() {
            Some(first) => {
                let mut result = String::with_capacity(input.len());
                result.push(upper_char(first));
                result.push_str(chars.as_str());
                result
            }
            None => String::new(),
        }
    }

    fn transform_in_place(&self, buffer: &mut [char]) -> Result<()> {
        if let Some(first) = buffer.first_mut() {
            *first = upper_char(*first);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_case() {
        assert_eq!(SentenceCase.transform("lower case statement"), "Lower case statement");
        assert_eq!(SentenceCase.transform("already Mixed CASE"), "Already Mixed CASE");
        assert_eq!(SentenceCase.transform("1st place"), "1st place");
        assert_eq!(SentenceCase.transform(""), "");
    }

    #[test]
    fn test_sentence_case_in_place() {
        let mut empty: Vec<char> = Vec::new();
        SentenceCase.transform_in_place(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut buffer: Vec<char> = "élan vital".chars().collect();
        SentenceCase.transform_in_place(&mut buffer).unwrap();
        assert_eq!(buffer.iter().collect::<String>(), "Élan vital");
    }
}
