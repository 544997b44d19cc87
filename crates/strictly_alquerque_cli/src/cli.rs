//! Command-line interface for the alquerque front end.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Alquerque - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "alquerque")]
#[command(
    about = "Alquerque for two players at one terminal",
    long_about = "Alquerque for two players at one terminal.\n\n\
                  Pieces step along the lines of a 5x5 board or jump an adjacent \
                  opposing piece into the empty hole beyond. Captures are mandatory \
                  and chained captures must be completed. A player who cannot move loses."
)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file [default: alquerque.toml, if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for boards and state
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested subcommand, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a game, reading one cell or command per line from stdin
    #[default]
    Play,

    /// Print the starting position and exit
    Show,
}

/// How the board and game state are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Drawn board, status line and prompts
    #[default]
    Text,
    /// One JSON object per line, for scripts and other front ends
    Json,
}
