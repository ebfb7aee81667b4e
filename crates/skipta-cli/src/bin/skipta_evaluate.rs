// skipta-evaluate: Score hyphenation pattern sets against a gold standard.
//
// Prints a tab-separated summary table to stdout and writes, for each
// hyphenator, a diff file `<TEST>-output-<name>.txt` listing the words it did
// not hyphenate completely.
//
// Usage:
//   skipta-evaluate [OPTIONS] GOLD TEST

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use skipta_cli::CliError;
use skipta_eval::{EvaluationConfig, GoldStandard, read_word_list, run_evaluation};

#[derive(Parser, Debug)]
#[clap(
    name = "skipta-evaluate",
    about = "Score hyphenation pattern sets against a hand-corrected word list"
)]
struct Args {
    /// Gold standard: one hyphenated word per line.
    gold: PathBuf,

    /// Test input: one unhyphenated word per line, all present in the gold standard.
    test: PathBuf,

    /// JSON file listing the hyphenators to evaluate (default: the built-in Icelandic sets).
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory containing hyph_<name>.dic files.
    #[clap(short = 'd', long)]
    dict_path: Option<PathBuf>,

    /// Hyphenation point delimiter used in the gold standard.
    #[clap(long, default_value = "-")]
    delimiter: char,

    /// Increase log verbosity (-v info, -vv debug).
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => EvaluationConfig::from_path(path)?,
        None => EvaluationConfig::icelandic_defaults(),
    };

    let gold = GoldStandard::from_path(&args.gold, args.delimiter)?;
    let words = read_word_list(&args.test)?;

    let registry = skipta_cli::registry(args.dict_path.as_deref());
    let hyphenators = registry.hyphenators(&config.hyphenators)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_evaluation(&gold, &words, &hyphenators, &args.test, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    skipta_cli::init_logging(args.verbose);

    if let Err(e) = run(&args) {
        skipta_cli::fatal(&e.to_string());
    }
}
