//! Hyphenation pattern dictionaries.
//!
//! This crate loads Liang-style hyphenation patterns in the Hunspell/Pyphen
//! `.dic` format and exposes them through the [`skipta_core::Hyphenator`]
//! trait.
//!
//! # Architecture
//!
//! - [`parser`] -- `.dic` file decoding and pattern line parsing
//! - [`dictionary`] -- Pattern table and break-point computation
//! - [`hyphenator`] -- `PatternHyphenator`: dictionary plus left/right minimums
//! - [`registry`] -- Resolving dictionary names to files on a search path

pub mod dictionary;
pub mod hyphenator;
pub mod parser;
pub mod registry;

pub use dictionary::PatternDictionary;
pub use hyphenator::PatternHyphenator;
pub use registry::DictionaryRegistry;

use std::path::PathBuf;

/// Error type for pattern dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing encoding line in pattern file")]
    MissingEncoding,
    #[error("unsupported pattern file encoding: {0}")]
    UnsupportedEncoding(String),
    #[error("pattern file is not valid {encoding}")]
    InvalidText { encoding: String },
    #[error("line {line}: invalid pattern {pattern:?}")]
    InvalidPattern { line: usize, pattern: String },
    #[error("line {line}: invalid non-standard hyphenation {alternative:?}")]
    InvalidAlternative { line: usize, alternative: String },
    #[error("no hyphenation dictionary named {name:?} in any of the search paths:\n{searched}")]
    DictionaryNotFound { name: String, searched: String },
}
