use crate::error::Result;

use super::{lower_char, StringTransformer};

/// Lowercases every character
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl StringTransformer for LowerCase {
    fn name(&self) -> &'static str {
        "LowerCase"
    }

    fn transform(&self, input: &str) -> String {
        input.chars().map(lower_char).collect()
    }

    fn transform_in_place(&self, buffer: &mut [char]) -> Result<()> {
        for ch in buffer.iter_mut() {
            *ch = lower_char(*ch);
        }
        Ok(())
    }
}
