// Pattern-based hyphenator: a dictionary plus left/right minimums.

use std::sync::Arc;

use skipta_core::hyphenator::{DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN};
use skipta_core::{BreakPoint, Hyphenator};

use crate::dictionary::PatternDictionary;

/// Hyphenator backed by a [`PatternDictionary`].
///
/// Only break offsets `i` with `left <= i <= word_len - right` are returned,
/// so at least `left` characters precede the first break and `right`
/// characters follow the last one.
#[derive(Debug, Clone)]
pub struct PatternHyphenator {
    dictionary: Arc<PatternDictionary>,
    left: usize,
    right: usize,
}

impl PatternHyphenator {
    pub fn new(dictionary: impl Into<Arc<PatternDictionary>>, left: usize, right: usize) -> Self {
        Self {
            dictionary: dictionary.into(),
            left,
            right,
        }
    }

    /// A hyphenator with the Icelandic default minimums (1 and 2).
    pub fn with_default_minimums(dictionary: impl Into<Arc<PatternDictionary>>) -> Self {
        Self::new(dictionary, DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN)
    }

    pub fn dictionary(&self) -> &PatternDictionary {
        &self.dictionary
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }
}

impl Hyphenator for PatternHyphenator {
    fn positions(&self, word: &str) -> Vec<BreakPoint> {
        let Some(last) = word.chars().count().checked_sub(self.right) else {
            return Vec::new();
        };
        self.dictionary
            .break_points(word)
            .into_iter()
            .filter(|p| self.left <= p.offset && p.offset <= last)
            .collect()
    }
}
