// Humanization engine: classifies the input shape and routes it to a segmenter
// String entry points never mutate input; buffer entry points own the caller buffer for the call

use std::borrow::Cow;
use std::sync::OnceLock;

use tracing::debug;

use crate::casing::{apply_case, apply_case_in_place, LetterCasing};
use crate::error::Result;
use crate::rules::HumanizeRules;
use crate::segmenter::{
    IndexScanSegmenter, PatternSegmenter, SegmentationStrategy, WordPatterns, WordSegmenter,
};
use crate::transformer::{self, StringTransformer};

/// Overall shape of an input, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// Only uppercase characters (or empty); returned unchanged
    Acronym,
    /// A separator touches whitespace; separators become spaces, then PascalCase segmentation
    FreestandingSeparators,
    /// Separators inside words; separators become spaces and casing is kept
    SeparatedWords,
    /// Plain PascalCase or free text
    PascalCase,
}

/// Humanization engine holding its rules and compiled patterns
#[derive(Debug)]
pub struct Humanizer {
    rules: HumanizeRules,
    patterns: WordPatterns,
    strategy: SegmentationStrategy,
}

impl Humanizer {
    /// Validate `rules` and compile the matchers they need
    pub fn new(rules: HumanizeRules) -> Result<Self> {
        rules.validate()?;
        let patterns = WordPatterns::compile(&rules)?;
        Ok(Self {
            rules,
            patterns,
            strategy: SegmentationStrategy::default(),
        })
    }

    pub fn with_default_rules() -> Result<Self> {
        Self::new(HumanizeRules::default())
    }

    /// Process-wide instance with default rules, built on first use
    pub fn shared() -> &'static Humanizer {
        static SHARED: OnceLock<Humanizer> = OnceLock::new();
        SHARED.get_or_init(|| {
            Humanizer::with_default_rules().expect("default humanize rules always compile")
        })
    }

    /// Select the segmenter behind `humanize(&str)`
    pub fn with_strategy(mut self, strategy: SegmentationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> SegmentationStrategy {
        self.strategy
    }

    pub fn rules(&self) -> &HumanizeRules {
        &self.rules
    }

    pub fn shape(&self, input: &str) -> InputShape {
        if input.chars().all(char::is_uppercase) {
            InputShape::Acronym
        } else if self.patterns.has_freestanding_separator(input) {
            InputShape::FreestandingSeparators
        } else if input.chars().any(|c| self.rules.is_separator(c)) {
            InputShape::SeparatedWords
        } else {
            InputShape::PascalCase
        }
    }

    /// Same classification as `shape`, without materializing a string
    pub fn buffer_shape(&self, buffer: &[char]) -> InputShape {
        let freestanding = buffer.windows(2).any(|pair| {
            (pair[0].is_whitespace() && self.rules.is_separator(pair[1]))
                || (self.rules.is_separator(pair[0]) && pair[1].is_whitespace())
        });

        if buffer.iter().all(|c| c.is_uppercase()) {
            InputShape::Acronym
        } else if freestanding {
            InputShape::FreestandingSeparators
        } else if buffer.iter().any(|&c| self.rules.is_separator(c)) {
            InputShape::SeparatedWords
        } else {
            InputShape::PascalCase
        }
    }

    /// Humanize `input` into a new string
    pub fn humanize(&self, input: &str) -> String {
        let shape = self.shape(input);
        debug!(?shape, strategy = ?self.strategy, chars = input.len(), "Humanizing string");

        match shape {
            InputShape::Acronym => input.to_string(),
            InputShape::FreestandingSeparators => self.segment(&self.replace_separators(input)),
            InputShape::SeparatedWords => self.replace_separators(input),
            InputShape::PascalCase => self.segment(input),
        }
    }

    /// Humanize a caller-owned buffer
    ///
    /// Returns a view of `buffer` when it was rewritten in place, or an owned buffer of a
    /// different length when segmentation ran. Separator replacement mutates `buffer` in
    /// both cases.
    pub fn humanize_buffer<'a>(&self, buffer: &'a mut [char]) -> Cow<'a, [char]> {
        let shape = self.buffer_shape(buffer);
        debug!(?shape, chars = buffer.len(), "Humanizing buffer");

        let segmenter = IndexScanSegmenter::new(&self.rules, self.patterns.classes());
        match shape {
            InputShape::Acronym => Cow::Borrowed(buffer),
            InputShape::FreestandingSeparators => {
                self.replace_separators_in_place(buffer);
                Cow::Owned(segmenter.segment_buffer(buffer))
            }
            InputShape::SeparatedWords => {
                self.replace_separators_in_place(buffer);
                Cow::Borrowed(buffer)
            }
            InputShape::PascalCase => Cow::Owned(segmenter.segment_buffer(buffer)),
        }
    }

    /// Humanize, then apply `casing`
    pub fn humanize_with_casing(&self, input: &str, casing: LetterCasing) -> String {
        apply_case(&self.humanize(input), casing)
    }

    /// Apply `casing` to an already humanized buffer without changing its length
    pub fn humanize_buffer_with_casing(&self, buffer: &mut [char], casing: LetterCasing) -> Result<()> {
        apply_case_in_place(buffer, casing)
    }

    fn segment(&self, input: &str) -> String {
        match self.strategy {
            SegmentationStrategy::Allocating => PatternSegmenter::new(&self.patterns).segment(input),
            SegmentationStrategy::InPlace => IndexScanSegmenter::new(&self.rules, self.patterns.classes()).segment(input),
        }
    }

    fn replace_separators(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| if self.rules.is_separator(c) { ' ' } else { c })
            .collect()
    }

    fn replace_separators_in_place(&self, buffer: &mut [char]) {
        for ch in buffer.iter_mut() {
            if self.rules.is_separator(*ch) {
                *ch = ' ';
            }
        }
    }
}

/// Humanize with the shared default engine
pub fn humanize(input: &str) -> String {
    Humanizer::shared().humanize(input)
}

/// Humanize a buffer with the shared default engine
pub fn humanize_buffer(buffer: &mut [char]) -> Cow<'_, [char]> {
    Humanizer::shared().humanize_buffer(buffer)
}

pub fn humanize_with_casing(input: &str, casing: LetterCasing) -> String {
    Humanizer::shared().humanize_with_casing(input, casing)
}

pub fn humanize_buffer_with_casing(buffer: &mut [char], casing: LetterCasing) -> Result<()> {
    Humanizer::shared().humanize_buffer_with_casing(buffer, casing)
}

/// Method-call access to humanization and casing on string slices
pub trait HumanizeExt {
    fn humanize(&self) -> String;
    fn humanize_with_casing(&self, casing: LetterCasing) -> String;
    fn apply_case(&self, casing: LetterCasing) -> String;
    fn transform(&self, transformers: &[&dyn StringTransformer]) -> String;
}

impl HumanizeExt for str {
    fn humanize(&self) -> String {
        humanize(self)
    }

    fn humanize_with_casing(&self, casing: LetterCasing) -> String {
        humanize_with_casing(self, casing)
    }

    fn apply_case(&self, casing: LetterCasing) -> String {
        apply_case(self, casing)
    }

    fn transform(&self, transformers: &[&dyn StringTransformer]) -> String {
        transformer::transform(self, transformers)
    }
}
