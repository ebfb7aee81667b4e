// Evaluation driver: run each configured hyphenator over the test words,
// write its diff file and print one summary row.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use skipta_core::{Hyphenator, NamedHyphenator};

use crate::EvalError;
use crate::gold::GoldStandard;
use crate::report;
use crate::score::score;
use crate::stats::{CorpusStatistics, Percentages};

/// Outcome of evaluating one hyphenator.
#[derive(Debug, Clone, PartialEq)]
pub struct HyphenatorResult {
    pub name: String,
    pub statistics: CorpusStatistics,
    pub percentages: Percentages,
    /// Diff file written for this hyphenator.
    pub report_path: PathBuf,
}

/// Read the test words, one per line, trimmed.
///
/// Blank lines are kept as empty words; they must then be present in the
/// gold standard like any other word.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, EvalError> {
    let read_error = |source| EvalError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_error)?;
        words.push(line.trim().to_string());
    }
    tracing::info!(words = words.len(), path = %path.display(), "loaded test words");
    Ok(words)
}

/// Score `hyphenator` on every test word and write the diff listing to
/// `out`.
///
/// Words whose produced breaks do not cover all gold breaks are listed as
/// `gold display<TAB>actual rendering`, the rendering using `-` as the
/// hyphen. Fails on the first word missing from the gold standard or the
/// first annotated break point.
pub fn evaluate_hyphenator<H, W>(
    hyphenator: &H,
    name: &str,
    gold: &GoldStandard,
    words: &[String],
    out: &mut W,
) -> Result<CorpusStatistics, EvalError>
where
    H: Hyphenator + ?Sized,
    W: Write,
{
    report::write_report_header(out, name)?;

    let mut stats = CorpusStatistics::new();
    for word in words {
        let entry = gold.require(word)?;
        let produced = hyphenator.positions(word);
        let word_score = score(word, &entry.positions, &produced)?;
        stats.record(&word_score);

        if word_score.is_reported() {
            let actual = hyphenator.inserted(word, report::DIFF_HYPHEN);
            report::write_diff_line(out, &entry.display, &actual)?;
        }
    }
    Ok(stats)
}

/// Evaluate every hyphenator in order.
///
/// Writes the summary header and one row per hyphenator to `summary`, and
/// one diff file per hyphenator next to `test_input` (see
/// [`report::report_path`]). Any error aborts the whole run.
pub fn run_evaluation<H, W>(
    gold: &GoldStandard,
    words: &[String],
    hyphenators: &[NamedHyphenator<H>],
    test_input: &Path,
    summary: &mut W,
) -> Result<Vec<HyphenatorResult>, EvalError>
where
    H: Hyphenator,
    W: Write,
{
    writeln!(summary, "{}", report::summary_header())?;

    let mut results = Vec::with_capacity(hyphenators.len());
    for hyphenator in hyphenators {
        let path = report::report_path(test_input, hyphenator.config());
        let write_error = |source| EvalError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_error)?;
        let mut out = BufWriter::new(file);
        let statistics = evaluate_hyphenator(hyphenator, hyphenator.name(), gold, words, &mut out)
            .map_err(|e| match e {
                EvalError::Io(source) => write_error(source),
                other => other,
            })?;
        out.flush().map_err(write_error)?;

        let percentages = statistics.percentages();
        tracing::info!(
            hyphenator = hyphenator.name(),
            words = statistics.total_words,
            perfect = statistics.perfect_words,
            okay = statistics.okay_words,
            bad = statistics.bad_words,
            good_hyphens = statistics.good_hyphens,
            bad_hyphens = statistics.bad_hyphens,
            report = %path.display(),
            "evaluated hyphenator"
        );
        writeln!(summary, "{}", report::summary_row(hyphenator.name(), &percentages))?;

        results.push(HyphenatorResult {
            name: hyphenator.name().to_string(),
            statistics,
            percentages,
            report_path: path,
        });
    }
    Ok(results)
}
