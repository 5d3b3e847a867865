mod cli;

use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tokenreplace_core::RunReporter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    let report = tokenreplace_core::run(&cli.config)
        .with_context(|| format!("Failed to run with config {}", cli.config.display()))?;

    print!("{}", RunReporter::generate_summary(&report));

    Ok(())
}

/// Progress messages go to stderr; `RUST_LOG` overrides the default `info` level
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
