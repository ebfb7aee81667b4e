// Pattern dictionary and break-point computation (Liang's algorithm).

use std::path::Path;

use hashbrown::HashMap;
use skipta_core::BreakPoint;

use crate::PatternError;
use crate::parser::{self, Level, Pattern};

/// Word boundary marker used by patterns such as `.ein5`.
const BOUNDARY: char = '.';

/// Pattern lookup entry: where the values start within the key, and the values.
#[derive(Debug, Clone)]
struct Entry {
    start: usize,
    values: Vec<Level>,
}

/// A loaded set of hyphenation patterns.
///
/// The dictionary itself has no left/right minimums; those belong to the
/// [`crate::PatternHyphenator`] wrapping it.
#[derive(Debug, Clone, Default)]
pub struct PatternDictionary {
    patterns: HashMap<Vec<char>, Entry>,
    max_len: usize,
}

impl PatternDictionary {
    /// Build a dictionary from parsed patterns. Later patterns with the same
    /// key replace earlier ones.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut map = HashMap::new();
        let mut max_len = 0;
        for pattern in patterns {
            max_len = max_len.max(pattern.key.len());
            map.insert(
                pattern.key,
                Entry {
                    start: pattern.start,
                    values: pattern.values,
                },
            );
        }
        Self {
            patterns: map,
            max_len,
        }
    }

    /// Parse a dictionary from the raw contents of a `.dic` file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PatternError> {
        Ok(Self::from_patterns(parser::parse_dic(data)?))
    }

    /// Load a dictionary from a `.dic` file.
    pub fn from_path(path: &Path) -> Result<Self, PatternError> {
        let data = std::fs::read(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_bytes(&data)?;
        tracing::debug!(
            path = %path.display(),
            patterns = dictionary.len(),
            "loaded hyphenation patterns"
        );
        Ok(dictionary)
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All break points of `word`, with no left/right minimums applied.
    ///
    /// The word is lowercased character by character before matching, so
    /// offsets always refer to characters of the original word. Offsets range
    /// over `0..=word length`.
    pub fn break_points(&self, word: &str) -> Vec<BreakPoint> {
        let mut pointed: Vec<char> = Vec::with_capacity(word.len() + 2);
        pointed.push(BOUNDARY);
        pointed.extend(word.chars().map(lower));
        pointed.push(BOUNDARY);
        let word_len = pointed.len() - 2;

        // levels[i] is the gap before pointed[i]
        let mut levels = vec![Level::default(); pointed.len() + 1];
        for i in 0..pointed.len() - 1 {
            let longest = (i + self.max_len).min(pointed.len());
            for j in i + 1..=longest {
                let Some(entry) = self.patterns.get(&pointed[i..j]) else {
                    continue;
                };
                for (k, value) in entry.values.iter().enumerate() {
                    let slot = &mut levels[i + entry.start + k];
                    if value.value >= slot.value {
                        *slot = value.clone();
                    }
                }
            }
        }

        levels
            .into_iter()
            .enumerate()
            .filter(|(_, level)| level.is_break())
            .filter_map(|(i, level)| {
                // gap before pointed[i] is the gap before word[i - 1]
                let offset = i.checked_sub(1)?;
                (offset <= word_len).then_some(BreakPoint {
                    offset,
                    alternative: level.alternative,
                })
            })
            .collect()
    }
}

/// Single-character lowercase mapping. Characters whose lowercase form is
/// longer than one character are kept as they are, so offsets stay aligned.
fn lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(lines: &str) -> PatternDictionary {
        PatternDictionary::from_bytes(format!("UTF-8\n{lines}").as_bytes()).unwrap()
    }

    fn offsets(dic: &PatternDictionary, word: &str) -> Vec<usize> {
        dic.break_points(word).iter().map(|p| p.offset).collect()
    }

    #[test]
    fn single_pattern() {
        let dic = dictionary("1ta\n");
        assert_eq!(offsets(&dic, "skipta"), vec![4]);
    }

    #[test]
    fn no_match() {
        let dic = dictionary("1ta\n");
        assert!(offsets(&dic, "hús").is_empty());
    }

    #[test]
    fn higher_even_value_inhibits() {
        let dic = dictionary("1ta\np2t\n");
        assert!(offsets(&dic, "skipta").is_empty());
    }

    #[test]
    fn higher_odd_value_wins() {
        let dic = dictionary("p2t\n3ta\n");
        assert_eq!(offsets(&dic, "skipta"), vec![4]);
    }

    #[test]
    fn boundary_patterns() {
        // .a1 breaks after an initial 'a', 1a. breaks before a final 'a'
        let dic = dictionary(".a1\n1a.\n");
        assert_eq!(offsets(&dic, "ala"), vec![1, 2]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let dic = dictionary("1ta\n");
        assert_eq!(offsets(&dic, "SKIPTA"), vec![4]);
        assert_eq!(offsets(&dic, "Þjóðta"), vec![4]);
    }

    #[test]
    fn icelandic_letters() {
        let dic = dictionary("ð1u\n");
        assert_eq!(offsets(&dic, "maðurinn"), vec![3]);
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let dic = dictionary("1ta\n2ta\n");
        assert_eq!(dic.len(), 1);
        assert!(offsets(&dic, "skipta").is_empty());
    }

    #[test]
    fn alternative_is_carried() {
        let dic = dictionary("c1k/k=k,1,2\n");
        let points = dic.break_points("backen");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].offset, 3);
        assert_eq!(points[0].alternative.as_ref().unwrap().index, -1);
    }

    #[test]
    fn empty_dictionary() {
        let dic = PatternDictionary::default();
        assert!(dic.is_empty());
        assert!(dic.break_points("skipta").is_empty());
        assert!(dic.break_points("").is_empty());
    }

    #[test]
    fn lower_keeps_multichar_lowercase() {
        assert_eq!(lower('Á'), 'á');
        assert_eq!(lower('İ'), 'İ');
    }
}
