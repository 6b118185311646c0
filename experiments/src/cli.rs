use std::path::PathBuf;

use crate::Error;

pub const DEFAULT_OUT: &str = "results.csv";
pub const USAGE_HINT: &str = "Run with --experiments --out PATH to run experiments and write CSV.";

#[derive(Debug, PartialEq)]
pub struct Options {
    pub experiments: bool,
    pub out: PathBuf,
    pub help: bool,
    /// Flags that were not recognised and got skipped.
    pub ignored: Vec<String>,
}

/// Parses the arguments that follow the program name.
pub fn parse<I>(args: I) -> Result<Options, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options {
        experiments: false,
        out: PathBuf::from(DEFAULT_OUT),
        help: false,
        ignored: Vec::new(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--experiments" => opts.experiments = true,
            "--out" => match args.next() {
                Some(path) => opts.out = PathBuf::from(path),
                None => return Err(Error::MissingValue("--out")),
            },
            "--help" | "-h" => opts.help = true,
            _ => opts.ignored.push(arg),
        }
    }

    Ok(opts)
}

pub fn print_usage() {
    eprintln!("Usage: experiments [OPTIONS]");
    eprintln!();
    eprintln!("  --experiments      Run the greedy and binary search experiments");
    eprintln!("  --out <path>       CSV output path (default: {})", DEFAULT_OUT);
    eprintln!("  -h, --help         Show this help");
}
