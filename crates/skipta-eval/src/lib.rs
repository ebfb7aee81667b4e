//! Evaluation of hyphenators against a gold-standard word list.
//!
//! # Architecture
//!
//! - [`gold`] -- Gold-standard loading (hyphenated word list)
//! - [`score`] -- Per-word comparison and classification
//! - [`stats`] -- Corpus totals and percentages
//! - [`report`] -- Summary table rows and per-hyphenator diff files
//! - [`evaluate`] -- Driving a list of hyphenators over a test word list
//! - [`config`] -- Hyphenator list configuration

pub mod config;
pub mod evaluate;
pub mod gold;
pub mod report;
pub mod score;
pub mod stats;

pub use config::EvaluationConfig;
pub use evaluate::{HyphenatorResult, evaluate_hyphenator, read_word_list, run_evaluation};
pub use gold::GoldStandard;
pub use score::{WordClassification, WordScore, score};
pub use stats::{CorpusStatistics, Percentages};

use std::path::PathBuf;

/// Error type for evaluation runs.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("test word {word:?} is not in the gold standard")]
    MissingGoldWord { word: String },
    #[error("hyphenator returned a non-standard hyphenation point at offset {offset} in {word:?}")]
    AnnotatedBreak { word: String, offset: usize },
    #[error("invalid configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
