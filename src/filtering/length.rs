//! Token length filtering.
//!
//! Tokens are whitespace-separated substrings. They are only used for coarse
//! length and vocabulary accounting, and do not match any model tokenizer.
use std::ops::RangeInclusive;
use std::str::SplitWhitespace;

use crate::record::QaRecord;

use super::Filter;

/// Splits text into tokens.
pub fn tokens(text: &str) -> SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Number of tokens in text.
pub fn count_tokens(text: &str) -> usize {
    tokens(text).count()
}

/// Keeps records whose question *and* answer token counts both lie in
/// `[min_tokens, max_tokens]`.
#[derive(Debug, Clone)]
pub struct TokenLength {
    bounds: RangeInclusive<usize>,
}

impl TokenLength {
    pub fn new(min_tokens: usize, max_tokens: usize) -> Self {
        Self {
            bounds: min_tokens..=max_tokens,
        }
    }

    pub fn min_tokens(&self) -> usize {
        *self.bounds.start()
    }

    pub fn max_tokens(&self) -> usize {
        *self.bounds.end()
    }
}

impl Filter<&str> for TokenLength {
    fn detect(&self, text: &str) -> bool {
        self.bounds.contains(&count_tokens(text))
    }
}

impl Filter<&QaRecord> for TokenLength {
    fn detect(&self, record: &QaRecord) -> bool {
        self.detect(record.question.as_str()) && self.detect(record.answer.as_str())
    }
}

impl Default for TokenLength {
    /// Default bounds are `[10, 512]` tokens.
    fn default() -> Self {
        Self::new(10, 512)
    }
}
