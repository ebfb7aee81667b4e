// skipta-hyphenate: Hyphenate text from stdin.
//
// Reads all of stdin, inserts the hyphen marker (soft hyphen by default) at
// every break point of every word and writes the result to stdout. Whitespace
// is copied unchanged and nothing is appended to the output.
//
// Usage:
//   skipta-hyphenate [-d DICT_PATH] [OPTIONS] < input.txt

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use skipta_cli::{CliError, DEFAULT_DICTIONARY};
use skipta_core::hyphenator::{DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN};
use skipta_core::{HyphenatorConfig, SOFT_HYPHEN, TextOptions, hyphenate_text};

#[derive(Parser, Debug)]
#[clap(
    name = "skipta-hyphenate",
    about = "Insert hyphenation marks into Icelandic text"
)]
struct Args {
    /// Hyphenation mode. Only "pattern" produces output.
    #[clap(long, default_value = "pattern")]
    mode: String,

    /// Marker inserted at each break point.
    #[clap(long, default_value = SOFT_HYPHEN)]
    hyphen: String,

    /// Pattern dictionary name (resolved to hyph_<name>.dic).
    #[clap(long, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Minimum number of characters before the first break.
    #[clap(long, default_value_t = DEFAULT_LEFT_MIN)]
    left: usize,

    /// Minimum number of characters after the last break.
    #[clap(long, default_value_t = DEFAULT_RIGHT_MIN)]
    right: usize,

    /// Directory containing hyph_<name>.dic files.
    #[clap(short = 'd', long)]
    dict_path: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<(), CliError> {
    let config = HyphenatorConfig::new(args.dictionary.clone(), args.dictionary)
        .with_minimums(args.left, args.right);
    let hyphenator = skipta_cli::registry(args.dict_path.as_deref()).hyphenator(&config)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let options = TextOptions {
        mode: Some(args.mode),
        hyphen: args.hyphen,
    };
    let output = hyphenate_text(&hyphenator, &input, &options);

    let mut out = io::stdout().lock();
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    skipta_cli::init_logging(args.verbose);

    if let Err(e) = run(args) {
        skipta_cli::fatal(&e.to_string());
    }
}
