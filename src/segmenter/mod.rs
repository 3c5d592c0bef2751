// Word segmentation for PascalCase input with two independent strategies
// The strategies are not unified: their acronym handling differs and tests pin that down

use serde::{Deserialize, Serialize};

pub mod char_class;
pub mod index_scan;
pub mod pattern_segmenter;
pub mod patterns;

pub use char_class::CharClasses;
pub use index_scan::{IndexScanSegmenter, ScanOffsets};
pub use pattern_segmenter::PatternSegmenter;
pub use patterns::WordPatterns;

/// How a word span is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Already readable, kept verbatim
    Acronym,
    /// Lowercased
    Normal,
    /// The standalone letter "I", kept uppercase
    Pronoun,
}

/// A classified `[start, end)` byte range of the segmented text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
    pub kind: WordKind,
}

impl WordSpan {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Which segmenter backs string humanization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationStrategy {
    /// Pattern matching over immutable text
    #[default]
    Allocating,
    /// Offset scan and exact-size scratch rewrite
    InPlace,
}

/// Turn PascalCase text into a space separated phrase
pub trait WordSegmenter {
    fn segment(&self, input: &str) -> String;
}
