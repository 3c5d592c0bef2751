// Character sets that drive shape classification and the index-scan segmenter
// Loaded from JSON by the CLI, defaulted everywhere else

use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, Result};

/// Configuration for separator handling and dropped punctuation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizeRules {
    /// Characters that separate words in snake/kebab style identifiers
    pub separators: Vec<char>,
    /// Punctuation dropped by the index-scan segmenter alongside whitespace
    pub ignored_punctuation: Vec<char>,
}

impl Default for HumanizeRules {
    fn default() -> Self {
        Self {
            separators: vec!['_', '-'],
            ignored_punctuation: vec!['?', '(', ')', '@'],
        }
    }
}

impl HumanizeRules {
    /// Parse rules from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json).map_err(|e| HumanizeError::InvalidRules {
            reason: e.to_string(),
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject sets that would overlap word characters or whitespace
    ///
    /// Ignore offsets must stay disjoint from boundary offsets (uppercase letters and
    /// digits), so neither set may contain alphanumerics.
    pub fn validate(&self) -> Result<()> {
        if self.separators.is_empty() {
            return Err(HumanizeError::InvalidRules {
                reason: "at least one separator is required".to_string(),
            });
        }

        let named_sets = [
            ("separators", &self.separators),
            ("ignored_punctuation", &self.ignored_punctuation),
        ];
        for (name, set) in named_sets {
            if let Some(bad) = set.iter().find(|c| c.is_alphanumeric() || c.is_whitespace()) {
                return Err(HumanizeError::InvalidRules {
                    reason: format!("{name} may not contain {bad:?}"),
                });
            }
        }

        Ok(())
    }

    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }

    /// Whitespace or configured punctuation
    pub fn is_ignored(&self, ch: char) -> bool {
        ch.is_whitespace() || self.ignored_punctuation.contains(&ch)
    }
}
