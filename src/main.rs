//! kanji-coverage CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use kanji_coverage::cli::{Cli, CoverageCommand};
use kanji_coverage::ui::{Output, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise only warnings are
/// shown. Logs go to stderr so stdout carries just the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kanji_coverage=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("kanji-coverage starting for {}", cli.path.display());

    let theme = Theme::detect();
    let command = CoverageCommand::new(cli.path, cli.api_key);
    let mut out = Output::new(std::io::stdout().lock(), theme.clone());

    match command.execute(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
