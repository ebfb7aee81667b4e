// Break points and break position sets.
//
// A break offset `i` means "a hyphen may appear immediately before the
// character at index `i`" (character index, not byte index).

use std::fmt;

// ---------------------------------------------------------------------------
// Non-standard hyphenation annotation
// ---------------------------------------------------------------------------

/// Non-standard hyphenation data attached to a break point.
///
/// Some pattern files describe breaks that change the spelling of the word,
/// e.g. `c1k/k=k,1,2` turns "backen" into "bak-ken". Instead of inserting a
/// hyphen, `cut` characters starting at `offset + index` are replaced with
/// `change`, where every `=` in `change` stands for the hyphen marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alternative {
    /// Replacement text, `=` marks where the hyphen goes.
    pub change: String,
    /// Shift applied to the break offset before replacing.
    pub index: isize,
    /// Number of original characters replaced.
    pub cut: usize,
}

// ---------------------------------------------------------------------------
// BreakPoint
// ---------------------------------------------------------------------------

/// One break position produced by a hyphenator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreakPoint {
    /// Character offset of the break.
    pub offset: usize,
    /// Non-standard hyphenation annotation, if the pattern carried one.
    pub alternative: Option<Alternative>,
}

impl BreakPoint {
    /// A plain break with no annotation.
    pub fn standard(offset: usize) -> Self {
        Self {
            offset,
            alternative: None,
        }
    }

    /// A break carrying non-standard hyphenation data.
    pub fn with_alternative(offset: usize, alternative: Alternative) -> Self {
        Self {
            offset,
            alternative: Some(alternative),
        }
    }

    /// Whether this is a plain pattern break without annotation payload.
    pub fn is_standard(&self) -> bool {
        self.alternative.is_none()
    }
}

impl From<usize> for BreakPoint {
    fn from(offset: usize) -> Self {
        Self::standard(offset)
    }
}

// ---------------------------------------------------------------------------
// BreakPositions
// ---------------------------------------------------------------------------

/// Strictly increasing set of break offsets within one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BreakPositions {
    offsets: Vec<usize>,
}

impl BreakPositions {
    /// An empty set (a word with no hyphenation points).
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute offsets from the segments of a hyphenated word.
    ///
    /// Offsets are the running character count of every segment except the
    /// last one, so `["hyp", "hen", "a", "tion"]` gives `[3, 6, 7]`.
    ///
    /// Only offsets strictly inside the word are kept: a leading or trailing
    /// delimiter, or a line made of the delimiter alone, contributes nothing,
    /// and repeated delimiters collapse to one offset.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let word_len: usize = segments.iter().map(|s| s.as_ref().chars().count()).sum();
        let mut offsets = Vec::with_capacity(segments.len().saturating_sub(1));
        let mut position = 0;
        if let Some((_, init)) = segments.split_last() {
            for segment in init {
                position += segment.as_ref().chars().count();
                if position > 0 && position < word_len && offsets.last() != Some(&position) {
                    offsets.push(position);
                }
            }
        }
        Self { offsets }
    }

    /// Number of break offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Set membership test.
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

impl FromIterator<usize> for BreakPositions {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut offsets: Vec<usize> = iter.into_iter().collect();
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }
}

impl fmt::Display for BreakPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, offset) in self.offsets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{offset}")?;
        }
        f.write_str("]")
    }
}
