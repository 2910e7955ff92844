//! slipfind - routing slip resolver
//!
//! Resolves a previously-recorded routing-slip correlation id from
//! local git commit history: walks the first-parent ancestry from HEAD
//! and queries the slip store for a match. On success exactly one line,
//! the correlation id, goes to stdout; all diagnostics go to stderr.

use clap::Parser;

mod cancel;
mod cli;
mod commands;
mod config;
mod error;
mod output;
mod repo;
mod resolver;
mod secret;
mod store;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;

/// Initialize tracing to stderr; stdout is reserved for the result.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "slipfind=debug" } else { "slipfind=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::resolve::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
