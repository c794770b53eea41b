//! glacier-purge: empty and delete an S3 Glacier vault.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glacier_purge::cli::Cli;
use glacier_purge::output::json::{error_code, format_error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            match format_error(&format!("{e:#}"), error_code(&e)) {
                Ok(obj) if json => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: this crate at `info`, everything else at `warn`).
fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "glacier_purge=info,warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}
