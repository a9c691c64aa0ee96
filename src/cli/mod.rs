mod handlers;
pub mod parse;

use std::io::IsTerminal;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ConvertError;

pub fn run() -> Result<(), ConvertError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    handlers::convert(&cli)
}

/// Install a compact stderr subscriber. `RUST_LOG` wins over `--debug`.
/// Returns `false` when a global subscriber was already set.
pub fn init_logging(debug: bool) -> bool {
    let fallback = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
