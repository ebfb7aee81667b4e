// Per-word scoring: compare a hyphenator's break points with the gold standard.

use std::fmt;

use skipta_core::{BreakPoint, BreakPositions};

use crate::EvalError;

/// How well a hyphenator did on one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClassification {
    /// Every gold break found and nothing extra.
    Perfect,
    /// No wrong breaks, but some gold breaks missing.
    Okay,
    /// At least one break that is not in the gold standard.
    Bad,
}

impl fmt::Display for WordClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Perfect => "perfect",
            Self::Okay => "okay",
            Self::Bad => "bad",
        })
    }
}

/// Result of scoring one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    pub classification: WordClassification,
    /// Produced breaks that are in the gold standard.
    pub good: usize,
    /// Produced breaks that are not in the gold standard.
    pub bad: usize,
    /// Number of gold breaks.
    pub all: usize,
}

impl WordScore {
    /// Classify from counts. `bad > 0` wins over everything; otherwise the
    /// word is perfect exactly when all gold breaks were found (0 of 0 counts).
    pub fn from_counts(good: usize, bad: usize, all: usize) -> Self {
        let classification = if bad > 0 {
            WordClassification::Bad
        } else if good == all {
            WordClassification::Perfect
        } else {
            WordClassification::Okay
        };
        Self {
            classification,
            good,
            bad,
            all,
        }
    }

    /// Whether the word belongs in the diff report: the produced breaks did
    /// not cover every gold break. A bad word that also found all gold
    /// breaks is not listed.
    pub fn is_reported(&self) -> bool {
        self.good != self.all
    }
}

/// Score the break points a hyphenator produced for `word`.
///
/// Membership is a set test: the order of `produced` does not matter, and
/// `good + bad` always equals `produced.len()`.
///
/// Fails if any produced break carries non-standard hyphenation data.
pub fn score(
    word: &str,
    gold: &BreakPositions,
    produced: &[BreakPoint],
) -> Result<WordScore, EvalError> {
    let mut good = 0;
    let mut bad = 0;
    for point in produced {
        if !point.is_standard() {
            return Err(EvalError::AnnotatedBreak {
                word: word.to_string(),
                offset: point.offset,
            });
        }
        if gold.contains(point.offset) {
            good += 1;
        } else {
            bad += 1;
        }
    }
    Ok(WordScore::from_counts(good, bad, gold.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipta_core::Alternative;

    fn gold(offsets: &[usize]) -> BreakPositions {
        offsets.iter().copied().collect()
    }

    fn produced(offsets: &[usize]) -> Vec<BreakPoint> {
        offsets.iter().copied().map(BreakPoint::standard).collect()
    }

    #[test]
    fn no_breaks_anywhere_is_perfect() {
        let s = score("skipta", &gold(&[]), &produced(&[])).unwrap();
        assert_eq!(s.classification, WordClassification::Perfect);
        assert_eq!((s.good, s.bad, s.all), (0, 0, 0));
        assert!(!s.is_reported());
    }

    #[test]
    fn exact_match_is_perfect() {
        let s = score("skipta", &gold(&[4]), &produced(&[4])).unwrap();
        assert_eq!(s.classification, WordClassification::Perfect);
        assert_eq!((s.good, s.bad, s.all), (1, 0, 1));
    }

    #[test]
    fn missing_break_is_okay() {
        let s = score("skipta", &gold(&[4]), &produced(&[])).unwrap();
        assert_eq!(s.classification, WordClassification::Okay);
        assert_eq!((s.good, s.bad, s.all), (0, 0, 1));
        assert!(s.is_reported());
    }

    #[test]
    fn wrong_break_is_bad() {
        let s = score("skipta", &gold(&[4]), &produced(&[2])).unwrap();
        assert_eq!(s.classification, WordClassification::Bad);
        assert_eq!((s.good, s.bad), (0, 1));
        assert!(s.is_reported());
    }

    #[test]
    fn extra_break_with_all_gold_found_is_bad_but_not_reported() {
        let s = score("stara", &gold(&[3]), &produced(&[1, 3])).unwrap();
        assert_eq!(s.classification, WordClassification::Bad);
        assert_eq!((s.good, s.bad, s.all), (1, 1, 1));
        assert!(!s.is_reported());
    }

    #[test]
    fn partial_match_is_okay() {
        let s = score("maðurinn", &gold(&[2, 5]), &produced(&[5])).unwrap();
        assert_eq!(s.classification, WordClassification::Okay);
        assert_eq!((s.good, s.bad, s.all), (1, 0, 2));
    }

    #[test]
    fn order_does_not_matter() {
        let a = score("hyphenation", &gold(&[3, 7, 8]), &produced(&[8, 3, 7])).unwrap();
        let b = score("hyphenation", &gold(&[3, 7, 8]), &produced(&[3, 7, 8])).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.classification, WordClassification::Perfect);
    }

    #[test]
    fn annotated_break_is_rejected() {
        let points = vec![
            BreakPoint::standard(1),
            BreakPoint::with_alternative(
                3,
                Alternative {
                    change: "k=k".into(),
                    index: -1,
                    cut: 2,
                },
            ),
        ];
        let err = score("backen", &gold(&[3]), &points).unwrap_err();
        assert!(matches!(
            err,
            EvalError::AnnotatedBreak { ref word, offset: 3 } if word == "backen"
        ));
    }

    #[test]
    fn classification_display() {
        assert_eq!(WordClassification::Perfect.to_string(), "perfect");
        assert_eq!(WordClassification::Bad.to_string(), "bad");
    }
}
