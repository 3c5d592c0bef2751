// Index-scan segmenter: one forward pass computes offsets, a second rewrites into
// scratch sized exactly `input.len() + boundaries - ignores`

use tracing::debug;

use super::{CharClasses, WordSegmenter};
use crate::rules::HumanizeRules;
use crate::transformer::{lower_char, upper_char};

/// Word boundary and dropped-character positions of a buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOffsets {
    /// Positions where a space is inserted before the character
    pub boundaries: Vec<usize>,
    /// Positions whose character is dropped
    pub ignores: Vec<usize>,
}

impl ScanOffsets {
    /// Length of the rewritten buffer for an input of `input_len` characters
    pub fn output_len(&self, input_len: usize) -> usize {
        input_len + self.boundaries.len() - self.ignores.len()
    }
}

/// Offset-driven segmenter; never reads or writes outside the computed bounds
#[derive(Debug, Clone, Copy)]
pub struct IndexScanSegmenter<'r> {
    rules: &'r HumanizeRules,
    classes: &'r CharClasses,
}

impl<'r> IndexScanSegmenter<'r> {
    pub fn new(rules: &'r HumanizeRules, classes: &'r CharClasses) -> Self {
        Self { rules, classes }
    }

    /// Single forward scan from position 1; position 0 is never a boundary nor ignored
    pub fn scan(&self, input: &[char]) -> ScanOffsets {
        let mut offsets = ScanOffsets::default();

        for i in 1..input.len() {
            let ch = input[i];
            if self.rules.is_ignored(ch) {
                offsets.ignores.push(i);
            } else if self.classes.is_upper_letter(ch)
                || (self.classes.is_decimal_digit(ch) && !self.classes.is_decimal_digit(input[i - 1]))
            {
                offsets.boundaries.push(i);
            }
        }

        offsets
    }

    /// Rewrite `input` into a freshly allocated buffer owned by the caller
    pub fn segment_buffer(&self, input: &[char]) -> Vec<char> {
        let offsets = self.scan(input);
        let mut scratch = vec![' '; offsets.output_len(input.len())];

        debug!(
            boundaries = offsets.boundaries.len(),
            ignores = offsets.ignores.len(),
            output_len = scratch.len(),
            "Index-scan segmentation"
        );

        copy_with_offsets(input, &offsets, &mut scratch);
        apply_casing(&mut scratch);
        scratch
    }
}

impl WordSegmenter for IndexScanSegmenter<'_> {
    fn segment(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        self.segment_buffer(&chars).into_iter().collect()
    }
}

/// Fill every scratch slot exactly once, driven by the output side
fn copy_with_offsets(input: &[char], offsets: &ScanOffsets, scratch: &mut [char]) {
    let mut boundaries = offsets.boundaries.iter().copied().peekable();
    let mut ignores = offsets.ignores.iter().copied().peekable();
    let mut cursor = 0;

    for slot in scratch.iter_mut() {
        while ignores.next_if_eq(&cursor).is_some() {
            cursor += 1;
        }

        if boundaries.next_if_eq(&cursor).is_some() {
            // Same input character is copied on the next slot.
            *slot = ' ';
        } else {
            *slot = input[cursor];
            cursor += 1;
        }
    }
}

/// First slot uppercase, standalone I/i uppercase, everything else lowercase
fn apply_casing(scratch: &mut [char]) {
    let len = scratch.len();
    for i in 0..len {
        let ch = scratch[i];
        let is_pronoun = matches!(ch, 'I' | 'i')
            && (i == 0 || scratch[i - 1].is_whitespace())
            && (i + 1 >= len || scratch[i + 1].is_whitespace());

        scratch[i] = if i == 0 || is_pronoun {
            upper_char(ch)
        } else {
            lower_char(ch)
        };
    }
}
