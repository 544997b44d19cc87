//! Strictly Alquerque terminal front end.
//!
//! Wires the rule engine to stdin/stdout: clap for arguments, an optional
//! TOML settings file, and a line-driven [`Session`] that renders the board
//! as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod input;
pub mod presenter;
pub mod session;
pub mod settings;

pub use cli::{Cli, Command, Format};
pub use input::{Input, InputError, Keyword, parse_line};
pub use presenter::ConsolePresenter;
pub use session::{Frame, Session};
pub use settings::{ConfigError, DEFAULT_CONFIG, Settings};
