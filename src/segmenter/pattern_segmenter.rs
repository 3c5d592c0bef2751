// Allocating segmenter: partitions immutable text into classified word spans

use tracing::debug;

use super::{WordKind, WordPatterns, WordSegmenter, WordSpan};
use crate::transformer::{lower_char, upper_char};

/// Pattern-matching segmenter over borrowed, precompiled `WordPatterns`
#[derive(Debug, Clone, Copy)]
pub struct PatternSegmenter<'p> {
    patterns: &'p WordPatterns,
}

impl<'p> PatternSegmenter<'p> {
    pub fn new(patterns: &'p WordPatterns) -> Self {
        Self { patterns }
    }

    /// Classified word spans of `text`, left to right
    pub fn spans(&self, text: &str) -> Vec<WordSpan> {
        let mut spans = Vec::new();
        let mut at = 0;

        while at < text.len() {
            let Some((start, end)) = self.patterns.find_word(text, at) else {
                break;
            };

            let end = if text[start..end].chars().all(char::is_uppercase) {
                match self.settle_uppercase_run(text, start, end) {
                    Some(end) => end,
                    None => {
                        // The whole run is glued to a following word character.
                        at = end;
                        continue;
                    }
                }
            } else {
                end
            };

            spans.push(WordSpan {
                start,
                end,
                kind: classify(text, start, end),
            });
            at = end;
        }

        spans
    }

    /// Apply the uppercase-run look-ahead to a greedy run `[start, end)`
    ///
    /// The run is accepted when followed by an ASCII digit or a word boundary. When followed
    /// by a lowercase letter, its last capital starts the next word instead. Any other word
    /// character, combining marks included, rejects the run.
    fn settle_uppercase_run(&self, text: &str, start: usize, end: usize) -> Option<usize> {
        let classes = self.patterns.classes();
        match text[end..].chars().next() {
            None => Some(end),
            Some(next) if next.is_ascii_digit() || !classes.is_word_char(next) => Some(end),
            Some(next) if classes.is_lower_letter(next) => {
                let (last_capital, _) = text[start..end].char_indices().next_back()?;
                (last_capital > 0).then_some(start + last_capital)
            }
            Some(_) => None,
        }
    }
}

impl WordSegmenter for PatternSegmenter<'_> {
    fn segment(&self, input: &str) -> String {
        let spans = self.spans(input);
        debug!(words = spans.len(), "Pattern segmentation");

        let mut result = String::with_capacity(input.len() + spans.len());
        for span in &spans {
            if !result.is_empty() {
                result.push(' ');
            }
            let word = span.text(input);
            match span.kind {
                WordKind::Acronym | WordKind::Pronoun => result.push_str(word),
                WordKind::Normal => result.extend(word.chars().map(lower_char)),
            }
        }

        capitalize_first(result)
    }
}

fn classify(text: &str, start: usize, end: usize) -> WordKind {
    let word = &text[start..end];
    if !word.chars().all(char::is_uppercase) {
        return WordKind::Normal;
    }
    if word == "I" {
        return WordKind::Pronoun;
    }

    let preceded_by_space = text[..start].ends_with(' ');
    if word.chars().count() > 1 || preceded_by_space {
        WordKind::Acronym
    } else {
        WordKind::Normal
    }
}

fn capitalize_first(mut result: String) -> String {
    if let Some(first) = result.chars().next() {
        let upper = upper_char(first);
        if upper != first {
            result.replace_range(..first.len_utf8(), upper.encode_utf8(&mut [0; 4]));
        }
    }
    result
}
