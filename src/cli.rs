// src/cli.rs
use crate::config::AppOptions;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

pub const USAGE: &str = "\
Usage: hanyu_scrape

Scrapes every entry of the CUHK Cantonese lexicon and writes
original.csv and corresponding.csv to the current directory.
Takes no options. Set RUST_LOG to change log verbosity.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Scrape,
    Help,
}

/// Decide what to do from the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn std::error::Error + Send + Sync>>
where
    I: IntoIterator<Item = String>,
{
    match args.into_iter().next() {
        None => Ok(Command::Scrape),
        Some(a) => match a.as_str() {
            "-h" | "--help" => Ok(Command::Help),
            _ => Err(format!("Unknown arg: {}", a).into()),
        },
    }
}

/// One full scrape with the built-in defaults, progress to stdout.
pub fn run() -> Result<RunSummary, Box<dyn std::error::Error + Send + Sync>> {
    crate::log::init();

    let opts = AppOptions::default();
    let mut progress = ConsoleProgress;
    runner::run(&opts, Some(&mut progress))
}
