// Error taxonomy for humanization and casing
// Every variant is raised before any output is allocated or any buffer is touched

use thiserror::Error;

/// Errors surfaced by the library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HumanizeError {
    /// Casing selector outside `Title`, `AllCaps`, `LowerCase`, `Sentence`
    #[error("unrecognized letter casing '{value}'")]
    InvalidCasing {
        /// The selector as it was received
        value: String,
    },

    /// The transformer cannot rewrite a buffer without changing its length
    #[error("{transformer} does not support in-place transformation")]
    UnsupportedInPlace {
        /// Name of the rejecting transformer
        transformer: &'static str,
    },

    /// Separator or ignore sets were rejected
    #[error("invalid humanize rules: {reason}")]
    InvalidRules {
        /// Why the rules were rejected
        reason: String,
    },

    /// Word patterns failed to compile for the given rules
    #[error("failed to compile word patterns: {reason}")]
    Pattern {
        /// Message reported by the regex builder
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HumanizeError>;
