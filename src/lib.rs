pub mod batch;
pub mod casing;
pub mod error;
pub mod humanizer;
pub mod rules;
pub mod segmenter;
pub mod transformer;

// Re-export main entry points for convenient access
pub use humanizer::{
    humanize, humanize_buffer, humanize_buffer_with_casing, humanize_with_casing,
    HumanizeExt, Humanizer, InputShape,
};

pub use casing::{apply_case, apply_case_in_place, LetterCasing};
pub use error::{HumanizeError, Result};
pub use rules::HumanizeRules;

// Re-export segmenters for direct use and benchmarking
pub use segmenter::{
    CharClasses, IndexScanSegmenter, PatternSegmenter, ScanOffsets, SegmentationStrategy, WordKind,
    WordPatterns, WordSegmenter, WordSpan,
};

pub use transformer::{
    transform, transform_in_place, LowerCase, SentenceCase, StringTransformer, TitleCase,
    UpperCase,
};
