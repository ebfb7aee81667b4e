// skipta-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use skipta_eval::EvalError;
use skipta_patterns::{DictionaryRegistry, PatternError};
use tracing_subscriber::EnvFilter;

/// Dictionary used by `skipta-hyphenate` when none is given.
pub const DEFAULT_DICTIONARY: &str = "is_2020_alpha2_extra";

/// Environment variable naming an extra dictionary directory.
const DICT_PATH_ENV: &str = "SKIPTA_DICT_PATH";

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "SKIPTA_LOG";

/// Errors surfaced by the CLI tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Patterns(#[from] PatternError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the list of directories to search for `hyph_<name>.dic` files.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SKIPTA_DICT_PATH` environment variable
/// 3. `~/.skipta/dictionaries`
/// 4. `/usr/share/hyphen`, then `/usr/share/skipta`
/// 5. Current working directory
pub fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".skipta").join("dictionaries"));
    }

    // System hyphenation dictionaries (hunspell/LibreOffice layout)
    paths.push(PathBuf::from("/usr/share/hyphen"));
    paths.push(PathBuf::from("/usr/share/skipta"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// A dictionary registry over [`build_search_paths`].
pub fn registry(dict_path: Option<&Path>) -> DictionaryRegistry {
    let paths = build_search_paths(dict_path);
    tracing::debug!(paths = ?paths, "dictionary search path");
    DictionaryRegistry::new(paths)
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install the stderr log subscriber.
///
/// `SKIPTA_LOG` takes precedence; otherwise the level is `warn`, raised to
/// `info` by one `-v` and `debug` by two.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
