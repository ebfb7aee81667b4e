// Report formatting: the summary table printed once per run and the
// per-hyphenator diff files listing words that were not fully hyphenated.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use skipta_core::HyphenatorConfig;

use crate::stats::Percentages;

/// Column titles of the summary table.
pub const SUMMARY_COLUMNS: [&str; 6] = [
    "HYPHENATOR",
    "Perfect words",
    "Okay words",
    "Bad words",
    "Good hyphens",
    "Bad hyphens",
];

/// Hyphen used when rendering a hyphenator's output in diff files.
pub const DIFF_HYPHEN: &str = "-";

/// The tab-separated summary header, without a trailing newline.
pub fn summary_header() -> String {
    SUMMARY_COLUMNS.join("\t")
}

/// One tab-separated summary row, without a trailing newline.
pub fn summary_row(name: &str, percentages: &Percentages) -> String {
    let mut row = String::from(name);
    for value in percentages.columns() {
        row.push('\t');
        row.push_str(&format_percentage(value));
    }
    row
}

/// Format a percentage in shortest round-trip form with a `%` suffix.
///
/// Whole numbers keep one decimal: `100.0%`, `50.0%`, `33.333333333333336%`.
/// Very small and very large values switch to scientific notation with a
/// signed two-digit exponent: `5e-05%`, `1e+16%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", float_repr(value))
}

/// Shortest round-trip rendering of `value`, decimal when the decimal
/// exponent is in `-4..16` and scientific otherwise.
fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{value:?}");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `3.3333333333333336e1`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if !(-4..16).contains(&exponent) {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.unsigned_abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exponent + 1;
    let body = if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let point = point as usize;
        if point >= digits.len() {
            format!("{digits}{}.0", "0".repeat(point - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(point);
            format!("{whole}.{fraction}")
        }
    };
    format!("{sign}{body}")
}

/// The fixed paragraph at the top of a hyphenator's diff file.
pub fn report_header(name: &str) -> String {
    format!(
        "Hyphenating words according to {name}; showing errors below.\n\
         Correct hyphenations from the gold standard are shown in the left column\n\
         next to differing actual hyphenations in the right column.\n\n"
    )
}

/// Path of the diff file for one hyphenator:
/// `<test input path>-output-<name with spaces as underscores>.txt`.
pub fn report_path(test_input: &Path, config: &HyphenatorConfig) -> PathBuf {
    let mut path = OsString::from(test_input.as_os_str());
    path.push("-output-");
    path.push(config.file_stem());
    path.push(".txt");
    PathBuf::from(path)
}

/// Write the report header paragraph.
pub fn write_report_header<W: Write>(out: &mut W, name: &str) -> std::io::Result<()> {
    out.write_all(report_header(name).as_bytes())
}

/// Write one diff line: gold display form on the left, actual rendering on
/// the right.
pub fn write_diff_line<W: Write>(out: &mut W, gold: &str, actual: &str) -> std::io::Result<()> {
    writeln!(out, "{gold}\t{actual}")
}
