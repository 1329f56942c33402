//! git-daily-report - print the commits of one day, grouped by author.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod banner;
mod cli;
mod keys;
mod session;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
