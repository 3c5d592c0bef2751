// Casing transformers with an allocating and an in-place entry point
// In-place operations never change buffer length, so case mapping is strictly one-to-one

use tracing::warn;

use crate::error::{HumanizeError, Result};

pub mod lower_case;
pub mod sentence_case;
pub mod title_case;
pub mod upper_case;

pub use lower_case::LowerCase;
pub use sentence_case::SentenceCase;
pub use title_case::TitleCase;
pub use upper_case::UpperCase;

/// A stateless text transform
pub trait StringTransformer: Send + Sync {
    /// Short name used in errors and logs
    fn name(&self) -> &'static str;

    /// Transform into a new string, leaving `input` untouched
    fn transform(&self, input: &str) -> String;

    /// Transform `buffer` without changing its length
    fn transform_in_place(&self, buffer: &mut [char]) -> Result<()>;

    /// Whether `transform_in_place` can succeed at all
    fn supports_in_place(&self) -> bool {
        true
    }
}

/// Apply `transformers` in order, each one's output feeding the next
pub fn transform(input: &str, transformers: &[&dyn StringTransformer]) -> String {
    transformers
        .iter()
        .fold(input.to_string(), |current, transformer| transformer.transform(&current))
}

/// Apply `transformers` in order to the same buffer
///
/// Every member is checked before the first write, so an unsupported member leaves the
/// buffer exactly as it was.
pub fn transform_in_place(buffer: &mut [char], transformers: &[&dyn StringTransformer]) -> Result<()> {
    if let Some(unsupported) = transformers.iter().find(|t| !t.supports_in_place()) {
        warn!(transformer = unsupported.name(), "Rejecting in-place pipeline");
        return Err(HumanizeError::UnsupportedInPlace {
            transformer: unsupported.name(),
        });
    }

    for transformer in transformers {
        transformer.transform_in_place(buffer)?;
    }
    Ok(())
}

/// Uppercase `ch` when its mapping is a single character, otherwise keep it
pub(crate) fn upper_char(ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

/// Lowercase `ch` when its mapping is a single character, otherwise keep it
pub(crate) fn lower_char(ch: char) -> char {
    let mut mapped = ch.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_one_mapping() {
        assert_eq!(upper_char('a'), 'A');
        assert_eq!(upper_char('ç'), 'Ç');
        assert_eq!(upper_char('ß'), 'ß');
        assert_eq!(upper_char('1'), '1');
        assert_eq!(lower_char('Σ'), 'σ');
        assert_eq!(lower_char('İ'), 'İ');
    }

    #[test]
    fn test_pipeline_order() {
        let result = transform("some TEXT here", &[&UpperCase, &LowerCase, &SentenceCase]);
        assert_eq!(result, "Some text here");

        let result = transform("some TEXT here", &[&LowerCase, &TitleCase]);
        assert_eq!(result, "Some Text Here");
    }

    #[test]
    fn test_empty_pipeline_copies_input() {
        assert_eq!(transform("unchanged Input", &[]), "unchanged Input");

        let mut buffer: Vec<char> = "unchanged".chars().collect();
        transform_in_place(&mut buffer, &[]).unwrap();
        assert_eq!(buffer.iter().collect::<String>(), "unchanged");
    }

    #[test]
    fn test_in_place_pipeline() {
        let mut buffer: Vec<char> = "MIXED case".chars().collect();
        transform_in_place(&mut buffer, &[&LowerCase, &SentenceCase]).unwrap();
        assert_eq!(buffer.iter().collect::<String>(), "Mixed case");
    }

    #[test]
    fn test_in_place_pipeline_rejects_before_mutating() {
        let mut buffer: Vec<char> = "MIXED case".chars().collect();
        let err = transform_in_place(&mut buffer, &[&LowerCase, &TitleCase]).unwrap_err();

        assert_eq!(err, HumanizeError::UnsupportedInPlace { transformer: "TitleCase" });
        assert_eq!(buffer.iter().collect::<String>(), "MIXED case");
    }
}
