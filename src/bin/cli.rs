// src/bin/cli.rs
use color_eyre::eyre::eyre;
use hanyu_scrape::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!(e))? {
        Command::Help => eprintln!("{}", cli::USAGE),
        Command::Scrape => {
            cli::run().map_err(|e| eyre!(e))?;
        }
    }
    Ok(())
}
