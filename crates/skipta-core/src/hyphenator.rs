// Hyphenator trait, hyphenator configuration and named hyphenators.

use serde::{Deserialize, Serialize};

use crate::breaks::BreakPoint;

// ---------------------------------------------------------------------------
// Hyphenator trait
// ---------------------------------------------------------------------------

/// Trait for hyphenation backends.
///
/// Implementations return break points as character offsets into `word`,
/// in increasing order, each meaning "a hyphen may go before this character".
pub trait Hyphenator {
    /// Return the break points of `word`.
    fn positions(&self, word: &str) -> Vec<BreakPoint>;

    /// Render `word` with `hyphen` inserted at every break point.
    ///
    /// Annotated break points replace letters instead of inserting a plain
    /// hyphen (see [`crate::Alternative`]).
    fn inserted(&self, word: &str, hyphen: &str) -> String {
        insert_hyphens(word, &self.positions(word), hyphen)
    }
}

impl<H: Hyphenator + ?Sized> Hyphenator for &H {
    fn positions(&self, word: &str) -> Vec<BreakPoint> {
        (**self).positions(word)
    }

    fn inserted(&self, word: &str, hyphen: &str) -> String {
        (**self).inserted(word, hyphen)
    }
}

impl<H: Hyphenator + ?Sized> Hyphenator for Box<H> {
    fn positions(&self, word: &str) -> Vec<BreakPoint> {
        (**self).positions(word)
    }

    fn inserted(&self, word: &str, hyphen: &str) -> String {
        (**self).inserted(word, hyphen)
    }
}

/// Insert `hyphen` into `word` at the given break points.
///
/// Points are applied right to left so earlier offsets stay valid. Offsets
/// and alternative spans past the end of the word are clamped to the end.
pub fn insert_hyphens(word: &str, points: &[BreakPoint], hyphen: &str) -> String {
    let mut pieces: Vec<String> = word.chars().map(String::from).collect();
    let uppercase = is_uppercase_word(word);

    for point in points.iter().rev() {
        match &point.alternative {
            None => {
                let at = point.offset.min(pieces.len());
                pieces.insert(at, hyphen.to_string());
            }
            Some(alternative) => {
                let shifted = (point.offset as isize).saturating_add(alternative.index);
                let start = shifted.clamp(0, pieces.len() as isize) as usize;
                let end = start.saturating_add(alternative.cut).min(pieces.len());
                let change = if uppercase {
                    alternative.change.to_uppercase()
                } else {
                    alternative.change.clone()
                };
                let replacement = change.replace('=', hyphen);
                pieces.splice(start..end, replacement.chars().map(String::from));
            }
        }
    }

    pieces.concat()
}

/// True when the word has at least one cased letter and no lowercase ones.
fn is_uppercase_word(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

// ---------------------------------------------------------------------------
// HyphenatorConfig
// ---------------------------------------------------------------------------

/// Default minimum number of characters before the first break (Icelandic).
pub const DEFAULT_LEFT_MIN: usize = 1;

/// Default minimum number of characters after the last break (Icelandic).
pub const DEFAULT_RIGHT_MIN: usize = 2;

fn default_left() -> usize {
    DEFAULT_LEFT_MIN
}

fn default_right() -> usize {
    DEFAULT_RIGHT_MIN
}

/// Identity and parameters of one hyphenator.
///
/// The `dictionary` name is resolved to a pattern file by the engine crate;
/// `left` and `right` are the minimum number of characters kept before the
/// first and after the last break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyphenatorConfig {
    /// Display name used in reports.
    pub name: String,
    /// Pattern dictionary name, e.g. `is_2020_alpha`.
    pub dictionary: String,
    #[serde(default = "default_left")]
    pub left: usize,
    #[serde(default = "default_right")]
    pub right: usize,
}

impl HyphenatorConfig {
    /// A configuration with the Icelandic default minimums.
    pub fn new(name: impl Into<String>, dictionary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dictionary: dictionary.into(),
            left: DEFAULT_LEFT_MIN,
            right: DEFAULT_RIGHT_MIN,
        }
    }

    pub fn with_minimums(mut self, left: usize, right: usize) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// The name with spaces replaced by underscores, for file names.
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_")
    }
}

// ---------------------------------------------------------------------------
// NamedHyphenator
// ---------------------------------------------------------------------------

/// A hyphenation engine paired with the configuration it was built from.
#[derive(Debug, Clone)]
pub struct NamedHyphenator<H> {
    config: HyphenatorConfig,
    engine: H,
}

impl<H: Hyphenator> NamedHyphenator<H> {
    pub fn new(config: HyphenatorConfig, engine: H) -> Self {
        Self { config, engine }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &HyphenatorConfig {
        &self.config
    }

    pub fn engine(&self) -> &H {
        &self.engine
    }
}

impl<H: Hyphenator> Hyphenator for NamedHyphenator<H> {
    fn positions(&self, word: &str) -> Vec<BreakPoint> {
        self.engine.positions(word)
    }

    fn inserted(&self, word: &str, hyphen: &str) -> String {
        self.engine.inserted(word, hyphen)
    }
}
