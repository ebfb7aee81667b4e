//! End-to-end evaluation over the fixtures in test-data/ with the pattern
//! engine from skipta-patterns.
//!
//! Run: cargo test -p skipta-eval --test fixture_evaluation

use std::path::{Path, PathBuf};

use skipta_eval::report::format_percentage;
use skipta_eval::{EvalError, EvaluationConfig, GoldStandard, read_word_list, run_evaluation};
use skipta_patterns::DictionaryRegistry;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data")
}

/// Copy the test word list into `dir` so report files land there.
fn copy_words(dir: &Path) -> PathBuf {
    let words = dir.join("words.txt");
    std::fs::copy(test_data().join("words.txt"), &words).unwrap();
    words
}

fn row(name: &str, values: [f64; 5]) -> String {
    let mut row = name.to_string();
    for v in values {
        row.push('\t');
        row.push_str(&format_percentage(v));
    }
    row
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fixture_run() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = copy_words(dir.path());

    let gold = GoldStandard::from_path(&test_data().join("gold.txt"), '-').unwrap();
    let words = read_word_list(&words_path).unwrap();
    let config = EvaluationConfig::from_path(&test_data().join("hyphenators.json")).unwrap();
    let registry = DictionaryRegistry::new(vec![test_data()]);
    let hyphenators = registry.hyphenators(&config.hyphenators).unwrap();

    let mut summary = Vec::new();
    let results = run_evaluation(&gold, &words, &hyphenators, &words_path, &mut summary).unwrap();
    assert_eq!(results.len(), 2);

    // left 1: skipta, bók, bara perfect; hestur, maðurinn okay; stara, starfa bad
    let loose = &results[0].statistics;
    assert_eq!(loose.total_words, 7);
    assert_eq!(
        (loose.perfect_words, loose.okay_words, loose.bad_words),
        (3, 2, 2)
    );
    assert_eq!(loose.possible_hyphens, 7);
    assert_eq!((loose.good_hyphens, loose.bad_hyphens), (3, 2));

    // left 2 removes the early breaks in stara and starfa
    let strict = &results[1].statistics;
    assert_eq!(
        (strict.perfect_words, strict.okay_words, strict.bad_words),
        (4, 3, 0)
    );
    assert_eq!((strict.good_hyphens, strict.bad_hyphens), (3, 0));

    let summary = String::from_utf8(summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        [
            "HYPHENATOR\tPerfect words\tOkay words\tBad words\tGood hyphens\tBad hyphens".to_string(),
            row(
                "Test patterns",
                [300.0 / 7.0, 200.0 / 7.0, 200.0 / 7.0, 300.0 / 7.0, 200.0 / 7.0]
            ),
            row(
                "Test patterns strict",
                [400.0 / 7.0, 300.0 / 7.0, 0.0, 300.0 / 7.0, 0.0]
            ),
        ]
    );

    let loose_report =
        std::fs::read_to_string(dir.path().join("words.txt-output-Test_patterns.txt")).unwrap();
    let body: Vec<&str> = loose_report.lines().skip(4).collect();
    assert_eq!(
        body,
        ["hes-tur\thestur", "ma-ður-inn\tmaðurinn", "star-fa\ts-tarfa"]
    );

    let strict_report =
        std::fs::read_to_string(dir.path().join("words.txt-output-Test_patterns_strict.txt"))
            .unwrap();
    assert!(strict_report.starts_with(
        "Hyphenating words according to Test patterns strict; showing errors below.\n"
    ));
    let body: Vec<&str> = strict_report.lines().skip(4).collect();
    assert_eq!(
        body,
        ["hes-tur\thestur", "ma-ður-inn\tmaðurinn", "star-fa\tstarfa"]
    );
}

#[test]
fn word_missing_from_gold_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = dir.path().join("words.txt");
    std::fs::write(&words_path, "skipta\nfjall\n").unwrap();

    let gold = GoldStandard::from_path(&test_data().join("gold.txt"), '-').unwrap();
    let words = read_word_list(&words_path).unwrap();
    let config = EvaluationConfig::from_path(&test_data().join("hyphenators.json")).unwrap();
    let hyphenators = DictionaryRegistry::new(vec![test_data()])
        .hyphenators(&config.hyphenators)
        .unwrap();

    let err = run_evaluation(&gold, &words, &hyphenators, &words_path, &mut std::io::sink())
        .unwrap_err();
    assert!(matches!(err, EvalError::MissingGoldWord { ref word } if word == "fjall"));
}
