// Letter casing selector and its mapping onto the transformer family

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, Result};
use crate::transformer::{LowerCase, SentenceCase, StringTransformer, TitleCase, UpperCase};

/// Desired casing of humanized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCasing {
    /// "Title Case Like This"
    Title,
    /// "ALL CAPS LIKE THIS"
    AllCaps,
    /// "lower case like this"
    LowerCase,
    /// "Sentence case like this"
    Sentence,
}

impl LetterCasing {
    pub const ALL: [LetterCasing; 4] = [
        LetterCasing::Title,
        LetterCasing::AllCaps,
        LetterCasing::LowerCase,
        LetterCasing::Sentence,
    ];

    /// The transformer implementing this casing
    pub fn transformer(self) -> &'static dyn StringTransformer {
        match self {
            LetterCasing::Title => &TitleCase,
            LetterCasing::AllCaps => &UpperCase,
            LetterCasing::LowerCase => &LowerCase,
            LetterCasing::Sentence => &SentenceCase,
        }
    }
}

impl fmt::Display for LetterCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LetterCasing::Title => "title",
            LetterCasing::AllCaps => "all_caps",
            LetterCasing::LowerCase => "lower_case",
            LetterCasing::Sentence => "sentence",
        };
        f.write_str(name)
    }
}

impl FromStr for LetterCasing {
    type Err = HumanizeError;

    /// Case-insensitive; `_`, `-` and spaces inside the name are ignored
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "title" => Ok(LetterCasing::Title),
            "allcaps" | "upper" | "uppercase" => Ok(LetterCasing::AllCaps),
            "lower" | "lowercase" => Ok(LetterCasing::LowerCase),
            "sentence" => Ok(LetterCasing::Sentence),
            _ => Err(HumanizeError::InvalidCasing { value: s.to_string() }),
        }
    }
}

impl TryFrom<u8> for LetterCasing {
    type Error = HumanizeError;

    fn try_from(value: u8) -> Result<Self> {
        LetterCasing::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| HumanizeError::InvalidCasing { value: value.to_string() })
    }
}

/// Change the casing of `input`
pub fn apply_case(input: &str, casing: LetterCasing) -> String {
    casing.transformer().transform(input)
}

/// Change the casing of `buffer` in place; `Title` is unsupported
pub fn apply_case_in_place(buffer: &mut [char], casing: LetterCasing) -> Result<()> {
    casing.transformer().transform_in_place(buffer)
}
