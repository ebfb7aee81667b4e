// Dictionary registry: resolve dictionary names to `hyph_<name>.dic` files.
//
// Names are matched case-insensitively. If no file matches the full name,
// trailing `_`-separated parts are dropped one at a time, so a request for
// `is_1985_corrected` falls back to `is_1985` and then `is`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use skipta_core::{HyphenatorConfig, NamedHyphenator};

use crate::PatternError;
use crate::dictionary::PatternDictionary;
use crate::hyphenator::PatternHyphenator;

/// File name prefix of pattern dictionaries.
const FILE_PREFIX: &str = "hyph_";

/// File name suffix of pattern dictionaries.
const FILE_SUFFIX: &str = ".dic";

/// Resolves dictionary names against an ordered list of directories.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRegistry {
    search_paths: Vec<PathBuf>,
}

impl DictionaryRegistry {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// All dictionaries found on the search path, keyed by lowercase name.
    ///
    /// When the same name exists in several directories, the earliest
    /// directory wins. Unreadable directories are skipped.
    pub fn available(&self) -> BTreeMap<String, PathBuf> {
        let mut found = BTreeMap::new();
        for dir in &self.search_paths {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                let Some(name) = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(dictionary_name)
                else {
                    continue;
                };
                found.entry(name.to_lowercase()).or_insert(path);
            }
        }
        found
    }

    /// Find the file for a dictionary name, with language fallback.
    ///
    /// A name that points at an existing `.dic` file is used as a path. Falling
    /// back to a shorter name is logged at `warn`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, PatternError> {
        let direct = Path::new(name);
        if name.ends_with(FILE_SUFFIX) && direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        let available = self.available();
        for candidate in fallback_names(name) {
            if let Some(path) = available.get(&candidate) {
                if candidate != name.to_lowercase() {
                    tracing::warn!(
                        requested = name,
                        using = %candidate,
                        "dictionary fallback, results come from a less specific pattern set"
                    );
                }
                return Ok(path.clone());
            }
        }

        Err(PatternError::DictionaryNotFound {
            name: name.to_string(),
            searched: self
                .search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// Resolve and load a dictionary by name.
    pub fn load(&self, name: &str) -> Result<PatternDictionary, PatternError> {
        let path = self.resolve(name)?;
        tracing::debug!(name, path = %path.display(), "resolved dictionary");
        PatternDictionary::from_path(&path)
    }

    /// Build a named hyphenator from its configuration.
    pub fn hyphenator(
        &self,
        config: &HyphenatorConfig,
    ) -> Result<NamedHyphenator<PatternHyphenator>, PatternError> {
        let dictionary = Arc::new(self.load(&config.dictionary)?);
        let engine = PatternHyphenator::new(dictionary, config.left, config.right);
        Ok(NamedHyphenator::new(config.clone(), engine))
    }

    /// Build hyphenators for several configurations, loading each distinct
    /// dictionary once.
    pub fn hyphenators(
        &self,
        configs: &[HyphenatorConfig],
    ) -> Result<Vec<NamedHyphenator<PatternHyphenator>>, PatternError> {
        let mut loaded: BTreeMap<&str, Arc<PatternDictionary>> = BTreeMap::new();
        let mut hyphenators = Vec::with_capacity(configs.len());
        for config in configs {
            let dictionary = match loaded.get(config.dictionary.as_str()) {
                Some(dictionary) => Arc::clone(dictionary),
                None => {
                    let dictionary = Arc::new(self.load(&config.dictionary)?);
                    loaded.insert(&config.dictionary, Arc::clone(&dictionary));
                    dictionary
                }
            };
            let engine = PatternHyphenator::new(dictionary, config.left, config.right);
            hyphenators.push(NamedHyphenator::new(config.clone(), engine));
        }
        Ok(hyphenators)
    }
}

/// Extract `<name>` from `hyph_<name>.dic`.
fn dictionary_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Candidate names from most to least specific: `is_1985_corrected`,
/// `is_1985`, `is`. Hyphens are treated like underscores.
fn fallback_names(name: &str) -> Vec<String> {
    let normalized = name.replace('-', "_").to_lowercase();
    let mut parts: Vec<&str> = normalized.split('_').collect();
    let mut names = Vec::with_capacity(parts.len());
    while !parts.is_empty() {
        names.push(parts.join("_"));
        parts.pop();
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tracing_test::traced_test;

    fn write_dic(dir: &Path, name: &str, patterns: &str) {
        fs::write(dir.join(format!("hyph_{name}.dic")), format!("UTF-8\n{patterns}")).unwrap();
    }

    #[test]
    fn fallback_order() {
        assert_eq!(
            fallback_names("is_1985_Corrected"),
            vec!["is_1985_corrected", "is_1985", "is"]
        );
        assert_eq!(fallback_names("is-IS"), vec!["is_is", "is"]);
    }

    #[test]
    fn dictionary_file_names() {
        assert_eq!(dictionary_name("hyph_is.dic"), Some("is"));
        assert_eq!(dictionary_name("hyph_is_JPind_1988.dic"), Some("is_JPind_1988"));
        assert_eq!(dictionary_name("hyph_.dic"), None);
        assert_eq!(dictionary_name("is.dic"), None);
        assert_eq!(dictionary_name("hyph_is.txt"), None);
    }

    #[test]
    fn resolve_exact_and_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is_JPind_1988", "1ta\n");
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        let path = registry.resolve("is_JPind_1988").unwrap();
        assert!(path.ends_with("hyph_is_JPind_1988.dic"));
        assert_eq!(registry.resolve("IS_JPIND_1988").unwrap(), path);
    }

    #[test]
    fn resolve_falls_back_to_language() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is", "1ta\n");
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        let path = registry.resolve("is_2020_alpha").unwrap();
        assert!(path.ends_with("hyph_is.dic"));
    }

    #[test]
    #[traced_test]
    fn fallback_is_logged_as_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is", "1ta\n");
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        registry.resolve("is_1985_corrected").unwrap();
        assert!(logs_contain("WARN"));
        assert!(logs_contain("dictionary fallback"));
        assert!(logs_contain("is_1985_corrected"));
    }

    #[test]
    #[traced_test]
    fn exact_match_is_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is_1985", "1ta\n");
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        registry.resolve("IS_1985").unwrap();
        assert!(!logs_contain("dictionary fallback"));
    }

    #[test]
    fn earlier_search_path_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_dic(first.path(), "is", "1ta\n");
        write_dic(second.path(), "is", "1ki\n");
        let registry = DictionaryRegistry::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert!(registry.resolve("is").unwrap().starts_with(first.path()));
    }

    #[test]
    fn missing_dictionary_lists_search_paths() {
        let dir = tempfile::tempdir().unwrap();
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        let err = registry.resolve("fo").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"fo\""));
        assert!(message.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn missing_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is", "1ta\n");
        let registry = DictionaryRegistry::new(vec![
            dir.path().join("does-not-exist"),
            dir.path().to_path_buf(),
        ]);
        assert_eq!(registry.available().len(), 1);
    }

    #[test]
    fn resolve_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "custom", "1ta\n");
        let path = dir.path().join("hyph_custom.dic");
        let registry = DictionaryRegistry::default();
        assert_eq!(registry.resolve(path.to_str().unwrap()).unwrap(), path);
    }

    #[test]
    fn hyphenators_share_dictionaries() {
        use skipta_core::Hyphenator;

        let dir = tempfile::tempdir().unwrap();
        write_dic(dir.path(), "is", "1ta\n");
        let registry = DictionaryRegistry::new(vec![dir.path().to_path_buf()]);
        let configs = vec![
            HyphenatorConfig::new("Loose", "is"),
            HyphenatorConfig::new("Strict", "is").with_minimums(1, 3),
        ];
        let hyphenators = registry.hyphenators(&configs).unwrap();
        assert_eq!(hyphenators.len(), 2);
        assert_eq!(hyphenators[0].inserted("skipta", "-"), "skip-ta");
        assert_eq!(hyphenators[1].inserted("skipta", "-"), "skipta");
    }
}
