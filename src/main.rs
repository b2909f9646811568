//! Chiffre - classical ciphers for short texts.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chiffre::cli::{execute, output, suggestion, Cli};
use chiffre::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the payload
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("chiffre=debug")
        } else {
            EnvFilter::new("chiffre=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
