//! keepass-secret - Read one secret out of a KeePass database.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keepass_secret::cli::output;
use keepass_secret::cli::{execute, Cli};
use keepass_secret::core::constants;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the secret
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keepass_secret=debug")
        } else {
            EnvFilter::new("keepass_secret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
