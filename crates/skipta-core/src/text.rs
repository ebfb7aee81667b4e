// Whitespace-preserving hyphenation of free-form text.
//
// The text is split into alternating whitespace and word segments, always
// starting and ending with a (possibly empty) whitespace segment. Words go
// through the hyphenator, whitespace is copied as-is.

use crate::hyphenator::Hyphenator;

/// Soft hyphen (U+00AD), the default marker.
pub const SOFT_HYPHEN: &str = "\u{00AD}";

/// Name of the only implemented hyphenation mode.
pub const PATTERN_MODE: &str = "pattern";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Supported hyphenation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyphenationMode {
    /// Pattern-based hyphenation through a [`Hyphenator`].
    Pattern,
}

impl HyphenationMode {
    /// Parse a mode name. Unknown names and `None` are not supported.
    pub fn parse(mode: Option<&str>) -> Option<Self> {
        match mode {
            Some(PATTERN_MODE) => Some(Self::Pattern),
            _ => None,
        }
    }
}

/// Options for [`hyphenate_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Hyphenation mode name. Anything other than `"pattern"` produces empty output.
    pub mode: Option<String>,
    /// Marker inserted at every break point.
    pub hyphen: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            mode: Some(PATTERN_MODE.to_string()),
            hyphen: SOFT_HYPHEN.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// One piece of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of whitespace, possibly empty.
    Whitespace(&'a str),
    /// A maximal run of non-whitespace characters.
    Word(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Whitespace(s) | Segment::Word(s) => s,
        }
    }
}

/// Whitespace as understood by the splitter. Includes the ASCII information
/// separators (U+001C..U+001F), which `char::is_whitespace` does not.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `text` into alternating whitespace and word segments.
///
/// The result always has odd length: `[ws, word, ws, word, ..., ws]`, where
/// the first and last whitespace segments may be empty. Concatenating the
/// segments gives back `text` exactly.
pub fn split_words_and_whitespace(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (i, c) in text.char_indices() {
        let space = is_space(c);
        if in_word && space {
            segments.push(Segment::Word(&text[start..i]));
            start = i;
            in_word = false;
        } else if !in_word && !space {
            segments.push(Segment::Whitespace(&text[start..i]));
            start = i;
            in_word = true;
        }
    }

    if in_word {
        segments.push(Segment::Word(&text[start..]));
        segments.push(Segment::Whitespace(""));
    } else {
        segments.push(Segment::Whitespace(&text[start..]));
    }

    segments
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Hyphenate every word of `text`, leaving whitespace byte-identical.
///
/// Returns an empty string when `options.mode` is not `"pattern"`.
pub fn hyphenate_text<H: Hyphenator + ?Sized>(
    hyphenator: &H,
    text: &str,
    options: &TextOptions,
) -> String {
    let Some(HyphenationMode::Pattern) = HyphenationMode::parse(options.mode.as_deref()) else {
        tracing::warn!(mode = ?options.mode, "unsupported hyphenation mode, producing no output");
        return String::new();
    };

    let mut output = String::with_capacity(text.len() + text.len() / 4);
    let mut words = 0usize;
    for segment in split_words_and_whitespace(text) {
        match segment {
            Segment::Whitespace(ws) => output.push_str(ws),
            Segment::Word(word) => {
                output.push_str(&hyphenator.inserted(word, &options.hyphen));
                words += 1;
            }
        }
    }
    tracing::debug!(words, input_bytes = text.len(), "hyphenated text");

    output
}
