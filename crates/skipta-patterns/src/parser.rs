// `.dic` pattern file parsing.
//
// File layout (Hunspell hyphen / Pyphen):
//   line 1       character encoding name, e.g. `UTF-8` or `ISO8859-1`
//   other lines  one pattern per line, e.g. `1ta`, `.ein5`, `c1k/k=k,1,2`
//
// Comments (`%`, `#`), blank lines and the LEFTHYPHENMIN-style header
// directives are skipped. `^^hh` stands for the character with hex code `hh`.

use skipta_core::Alternative;

use crate::PatternError;

/// Header directives that carry no pattern data.
const SKIPPED_DIRECTIVES: &[&str] = &[
    "LEFTHYPHENMIN",
    "RIGHTHYPHENMIN",
    "COMPOUNDLEFTHYPHENMIN",
    "COMPOUNDRIGHTHYPHENMIN",
];

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Character encodings accepted on the first line of a `.dic` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

impl Encoding {
    /// Parse the encoding name from the first line of a pattern file.
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso8859-1" | "iso-8859-1" | "iso_8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            _ => Err(PatternError::UnsupportedEncoding(name.to_string())),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<String, PatternError> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| PatternError::InvalidText {
                    encoding: "UTF-8".to_string(),
                }),
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsed patterns
// ---------------------------------------------------------------------------

/// Priority value between two pattern letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    pub value: u8,
    /// Non-standard hyphenation data, only ever set on odd values.
    pub alternative: Option<Alternative>,
}

impl Level {
    pub fn is_break(&self) -> bool {
        self.value % 2 == 1
    }
}

/// One pattern with its zero-trimmed value list.
///
/// `values[k]` applies to the gap before letter `start + k` of `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub key: Vec<char>,
    pub start: usize,
    pub values: Vec<Level>,
}

/// Split a raw pattern file into its encoding and decoded patterns.
pub fn parse_dic(bytes: &[u8]) -> Result<Vec<Pattern>, PatternError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let (first, rest) = match bytes.iter().position(|&b| b == b'\n') {
        Some(nl) => (&bytes[..nl], &bytes[nl + 1..]),
        None => (bytes, &[][..]),
    };

    let encoding_name = std::str::from_utf8(first)
        .ok()
        .and_then(|line| line.split_whitespace().next())
        .ok_or(PatternError::MissingEncoding)?;
    let encoding = Encoding::from_name(encoding_name)?;
    let text = encoding.decode(rest)?;

    let mut patterns = Vec::new();
    for (i, line) in text.lines().enumerate() {
        // +2: one-based, and the encoding occupies line 1
        if let Some(pattern) = parse_line(line, i + 2)? {
            patterns.push(pattern);
        }
    }
    Ok(patterns)
}

/// Parse a single pattern line.
///
/// Returns `None` for lines that carry no pattern: blanks, comments, header
/// directives, and patterns whose values are all zero.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Pattern>, PatternError> {
    let line = line.trim();
    if line.is_empty()
        || line.starts_with('%')
        || line.starts_with('#')
        || SKIPPED_DIRECTIVES.iter().any(|d| line.starts_with(d))
    {
        return Ok(None);
    }

    let line = decode_hex_escapes(line);

    let (body, alternative) = match line.split_once('/') {
        Some((body, alt)) if line.contains('=') => {
            (body, Some(parse_alternative(body, alt, line_no)?))
        }
        _ => (line.as_str(), None),
    };

    let mut key = Vec::new();
    let mut levels: Vec<Level> = vec![Level::default()];
    let mut pending_digit = false;

    for c in body.chars() {
        if let Some(d) = c.to_digit(10) {
            if pending_digit {
                return Err(PatternError::InvalidPattern {
                    line: line_no,
                    pattern: body.to_string(),
                });
            }
            let slot = levels.len() - 1;
            levels[slot].value = d as u8;
            pending_digit = true;
        } else {
            key.push(c);
            levels.push(Level::default());
            pending_digit = false;
        }
    }

    if let Some((change, base_index, cut)) = alternative {
        // The shift counts down by one per gap, starting before the first letter.
        for (k, level) in levels.iter_mut().enumerate() {
            if level.is_break() {
                level.alternative = Some(Alternative {
                    change: change.clone(),
                    index: base_index - (k as isize + 1),
                    cut,
                });
            }
        }
    }

    let Some(start) = levels.iter().position(|l| l.value != 0) else {
        return Ok(None);
    };
    let end = levels
        .iter()
        .rposition(|l| l.value != 0)
        .map_or(start, |e| e + 1);

    Ok(Some(Pattern {
        key,
        start,
        values: levels[start..end].to_vec(),
    }))
}

/// Parse the `change,index,cut` part of a non-standard hyphenation pattern.
fn parse_alternative(
    body: &str,
    alternative: &str,
    line_no: usize,
) -> Result<(String, isize, usize), PatternError> {
    let invalid = || PatternError::InvalidAlternative {
        line: line_no,
        alternative: alternative.to_string(),
    };

    let mut fields = alternative.split(',');
    let change = fields.next().ok_or_else(invalid)?.to_string();
    let mut index: isize = fields
        .next()
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(invalid)?;
    let cut: usize = fields
        .next()
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(invalid)?;

    if body.starts_with('.') {
        index += 1;
    }
    Ok((change, index, cut))
}

/// Replace `^^hh` escapes (lowercase hex) with the character they encode.
fn decode_hex_escapes(line: &str) -> String {
    if !line.contains("^^") {
        return line.to_string();
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 3 < chars.len() && chars[i] == '^' && chars[i + 1] == '^' {
            let hex: String = chars[i + 2..i + 4].iter().collect();
            let is_lower_hex = hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
            if is_lower_hex {
                if let Some(c) = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    out.push(c);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
