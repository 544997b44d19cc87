//! Strictly Alquerque - terminal game
//!
//! Two players share one terminal and take turns entering cells.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_alquerque_cli::{Cli, Command, Session, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    init_tracing(&settings);

    let command = cli.command();
    info!(?command, format = ?cli.format, "Starting alquerque");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(settings, cli.format, stdin, stdout);

    match command {
        Command::Play => session.run(),
        Command::Show => session.show(),
    }
}

/// Logs to stderr so the board on stdout stays clean.
fn init_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
