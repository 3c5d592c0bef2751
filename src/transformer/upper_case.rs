use crate::error::Result;

use super::{upper_char, StringTransformer};

/// Uppercases every character
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCase;

impl StringTransformer for UpperCase {
    fn name(&self) -> &'static str {
        "UpperCase"
    }

    fn transform(&self, input: &str) -> String {
        input.chars().map(upper_char).collect()
    }

    fn transform_in_place(&self, buffer: &mut [char]) -> Result<()> {
        for ch in buffer.iter_mut() {
            *ch = upper_char(*ch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_case() {
        assert_eq!(UpperCase.transform("lower case statement"), "LOWER CASE STATEMENT");
        // ß has no single-character uppercase
        assert_eq!(UpperCase.transform("straße"), "STRAßE");

        let mut buffer: Vec<char> = "straße".chars().collect();
        UpperCase.transform_in_place(&mut buffer).unwrap();
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.iter().collect::<String>(), "STRAßE");
    }
}
