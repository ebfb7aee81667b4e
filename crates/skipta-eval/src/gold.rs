// Gold standard: hand-corrected hyphenations, one word per line.
//
// Each line is a word with its hyphenation points marked by a delimiter,
// e.g. `ma-ður-inn`. The unhyphenated word is the key; the trimmed line is
// kept for display in diff reports.

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashMap;
use skipta_core::BreakPositions;

use crate::EvalError;

/// Default hyphenation point delimiter.
pub const DEFAULT_DELIMITER: char = '-';

/// One gold-standard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldEntry {
    /// The trimmed line as written in the gold standard, e.g. `skip-ta`.
    pub display: String,
    /// Break offsets derived from the delimiters.
    pub positions: BreakPositions,
}

/// Gold-standard hyphenations keyed by unhyphenated word.
#[derive(Debug, Clone, Default)]
pub struct GoldStandard {
    entries: HashMap<String, GoldEntry>,
    duplicates: usize,
}

impl GoldStandard {
    /// Build from lines using the default `-` delimiter.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with_delimiter(lines, DEFAULT_DELIMITER)
    }

    /// Build from lines with a custom delimiter.
    ///
    /// If two lines reduce to the same word, the later line wins and a
    /// warning is logged.
    pub fn from_lines_with_delimiter<I, S>(lines: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut gold = Self::default();
        for line in lines {
            gold.insert_line(line.as_ref(), delimiter);
        }
        tracing::info!(
            entries = gold.len(),
            duplicates = gold.duplicates,
            "loaded gold standard"
        );
        gold
    }

    /// Read a gold-standard file.
    pub fn from_path(path: &Path, delimiter: char) -> Result<Self, EvalError> {
        let read_error = |source| EvalError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(read_error)?;
        let lines = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(Self::from_lines_with_delimiter(lines, delimiter))
    }

    fn insert_line(&mut self, line: &str, delimiter: char) {
        let trimmed = line.trim();
        let segments: Vec<&str> = trimmed.split(delimiter).collect();
        let word = segments.concat();
        let entry = GoldEntry {
            display: trimmed.to_string(),
            positions: BreakPositions::from_segments(&segments),
        };
        if let Some(previous) = self.entries.insert(word, entry) {
            self.duplicates += 1;
            tracing::warn!(
                previous = %previous.display,
                replacement = trimmed,
                "duplicate gold-standard word, keeping the later entry"
            );
        }
    }

    /// Look up a word.
    pub fn get(&self, word: &str) -> Option<&GoldEntry> {
        self.entries.get(word)
    }

    /// Display form of a word, e.g. `skip-ta`.
    pub fn display(&self, word: &str) -> Option<&str> {
        self.get(word).map(|e| e.display.as_str())
    }

    /// Gold break offsets of a word.
    pub fn positions(&self, word: &str) -> Option<&BreakPositions> {
        self.get(word).map(|e| &e.positions)
    }

    /// Look up a word, failing if it is not in the gold standard.
    pub fn require(&self, word: &str) -> Result<&GoldEntry, EvalError> {
        self.get(word).ok_or_else(|| EvalError::MissingGoldWord {
            word: word.to_string(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lines that replaced an earlier line for the same word.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
