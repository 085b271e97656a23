mod library;
mod parse;
mod sweep;

use std::{fs, path::PathBuf};

use anyhow::Context;
use structopt::StructOpt;

use crate::parse::{parse_sequence, ParseMode};
use crate::sweep::count_window_increases;

/// Count the three-measurement windows in a file of integers whose sum
/// increased over the previous window's sum.
#[derive(StructOpt)]
struct Args {
    /// File of measurements to read, one integer per line
    #[structopt(default_value = "./input")]
    file: PathBuf,

    /// How to treat malformed lines: "lenient" coerces them to a best-effort
    /// value, "strict" rejects the input
    #[structopt(short, long, default_value = "lenient")]
    mode: ParseMode,
}

fn main() -> anyhow::Result<()> {
    let args = Args::from_args();

    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read file: {}", args.file.display()))?;

    let measurements = parse_sequence(&contents, args.mode).context("failed to parse input")?;
    let count = count_window_increases(&measurements);

    println!("{}", count);
    Ok(())
}
