// Corpus statistics: running totals per hyphenator and derived percentages.

use crate::score::{WordClassification, WordScore};

/// Running totals for one hyphenator over a test corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStatistics {
    pub perfect_words: usize,
    pub okay_words: usize,
    pub bad_words: usize,
    pub total_words: usize,
    /// Produced breaks found in the gold standard.
    pub good_hyphens: usize,
    /// Produced breaks not in the gold standard.
    pub bad_hyphens: usize,
    /// All gold breaks of the scored words.
    pub possible_hyphens: usize,
}

impl CorpusStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scored word to the totals.
    pub fn record(&mut self, score: &WordScore) {
        match score.classification {
            WordClassification::Perfect => self.perfect_words += 1,
            WordClassification::Okay => self.okay_words += 1,
            WordClassification::Bad => self.bad_words += 1,
        }
        self.total_words += 1;
        self.possible_hyphens += score.all;
        self.good_hyphens += score.good;
        self.bad_hyphens += score.bad;
    }

    /// Derive percentages from the totals.
    ///
    /// Word percentages are relative to the number of words, hyphen
    /// percentages to the number of gold breaks. A zero denominator gives 0%.
    pub fn percentages(&self) -> Percentages {
        if self.total_words == 0 {
            tracing::warn!("no test words scored, word percentages reported as 0%");
        }
        if self.possible_hyphens == 0 {
            tracing::warn!("gold standard has no hyphens for the test words, hyphen percentages reported as 0%");
        }
        Percentages {
            perfect_words: percent(self.perfect_words, self.total_words),
            okay_words: percent(self.okay_words, self.total_words),
            bad_words: percent(self.bad_words, self.total_words),
            good_hyphens: percent(self.good_hyphens, self.possible_hyphens),
            bad_hyphens: percent(self.bad_hyphens, self.possible_hyphens),
        }
    }
}

/// `100 * count / total`, or 0 when `total` is 0.
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (100 * count) as f64 / total as f64
    }
}

/// Percentages derived from [`CorpusStatistics`].
///
/// The three word percentages sum to 100 for a non-empty corpus. Bad hyphens
/// can exceed 100% when a hyphenator produces more wrong breaks than the
/// gold standard has breaks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Percentages {
    pub perfect_words: f64,
    pub okay_words: f64,
    pub bad_words: f64,
    pub good_hyphens: f64,
    pub bad_hyphens: f64,
}

impl Percentages {
    /// Values in summary-table column order.
    pub fn columns(&self) -> [f64; 5] {
        [
            self.perfect_words,
            self.okay_words,
            self.bad_words,
            self.good_hyphens,
            self.bad_hyphens,
        ]
    }
}
