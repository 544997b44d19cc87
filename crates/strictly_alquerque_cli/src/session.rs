//! Line-driven game session between the engine and a terminal.
//!
//! A [`Session`] reads one cell or command per line, feeds cells to the
//! engine and writes what changed. In text mode it draws the board; in JSON
//! mode it writes one [`Frame`] per line so another program can drive it.

use crate::cli::Format;
use crate::input::{self, Input, Keyword};
use crate::presenter::ConsolePresenter;
use crate::settings::Settings;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_alquerque::{Event, GameEngine, Snapshot, Transition, dispatch};
use tracing::{debug, info, instrument};

/// One JSON output record.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    /// Events produced by the input, in order.
    pub events: &'a [Event],
    /// Engine state after the input.
    pub snapshot: Snapshot,
}

/// An interactive game bound to an input and an output stream.
pub struct Session<R, W> {
    engine: GameEngine,
    settings: Settings,
    format: Format,
    presenter: ConsolePresenter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session on a fresh game.
    pub fn new(settings: Settings, format: Format, input: R, output: W) -> Self {
        Self::with_engine(GameEngine::new(), settings, format, input, output)
    }

    /// Creates a session that continues an existing game.
    pub fn with_engine(
        engine: GameEngine,
        settings: Settings,
        format: Format,
        input: R,
        output: W,
    ) -> Self {
        Self {
            engine,
            settings,
            format,
            presenter: ConsolePresenter::new(),
            input,
            output,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes the current position once.
    #[instrument(skip(self))]
    pub fn show(&mut self) -> Result<()> {
        self.write_state(&[])
    }

    /// Plays until `quit` or end of input.
    #[instrument(skip(self), fields(format = ?self.format))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.write_state(&[])?;
        if self.format == Format::Text {
            writeln!(self.output, "Type 'help' for commands.")?;
        }
        self.prompt()?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            match input::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Input::Command(Keyword::Quit))) => break,
                Ok(Some(input)) => self.handle(input)?,
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    self.write_error(&e.to_string())?;
                }
            }
            self.prompt()?;
        }

        info!(moves = self.engine.history().len(), "Session ended");
        Ok(())
    }

    /// Applies one parsed input.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Select(cell) => {
                let events = self.engine.select_cell(cell);
                if events.is_empty() && self.format == Format::Text {
                    writeln!(self.output, "Nothing to do at {cell}.")?;
                    return Ok(());
                }
                self.report(&events)
            }
            Input::Command(Keyword::Reset) => {
                let events = self.engine.reset();
                self.report(&events)
            }
            Input::Command(Keyword::Moves) => self.write_moves(),
            Input::Command(Keyword::History) => self.write_history(),
            Input::Command(Keyword::Help) => {
                write!(self.output, "{}", Keyword::help_text())?;
                Ok(())
            }
            Input::Command(Keyword::Quit) => Ok(()),
        }
    }

    fn report(&mut self, events: &[Event]) -> Result<()> {
        match self.format {
            Format::Json => self.write_state(events),
            Format::Text => {
                dispatch(events, &mut self.presenter);
                if self.presenter.take_redraw() {
                    self.write_state(events)?;
                }
                for message in self.presenter.drain_messages() {
                    writeln!(self.output, "{message}")?;
                }
                Ok(())
            }
        }
    }

    fn write_state(&mut self, events: &[Event]) -> Result<()> {
        match self.format {
            Format::Json => {
                let frame = Frame {
                    events,
                    snapshot: self.engine.snapshot(),
                };
                let json = serde_json::to_string(&frame).context("Failed to encode frame")?;
                writeln!(self.output, "{json}")?;
            }
            Format::Text => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "{}",
                    self.engine.board().render(self.settings.glyphs())
                )?;
                writeln!(self.output, "{}", self.engine.status_line())?;
                if *self.settings.show_catalogue() && !self.engine.is_game_over() {
                    self.write_selectable()?;
                }
            }
        }
        Ok(())
    }

    fn write_selectable(&mut self) -> Result<()> {
        let cells: Vec<String> = self
            .engine
            .catalogue()
            .cells()
            .map(|cell| cell.to_string())
            .collect();
        writeln!(self.output, "Selectable: {}", cells.join(" "))?;

        if let Some(selected) = self.engine.selection() {
            let targets: Vec<String> = self
                .engine
                .catalogue()
                .destinations(self.engine.board(), self.engine.active_player(), selected)
                .iter()
                .map(|cell| cell.to_string())
                .collect();
            writeln!(self.output, "{selected} can reach: {}", targets.join(" "))?;
        }
        Ok(())
    }

    fn write_moves(&mut self) -> Result<()> {
        let board = self.engine.board();
        let player = self.engine.active_player();
        let catalogue = self.engine.catalogue();
        let transitions: Vec<Transition> = catalogue
            .cells()
            .flat_map(|cell| catalogue.transitions(board, player, cell))
            .collect();

        match self.format {
            Format::Json => {
                let json = serde_json::to_string(&transitions)
                    .context("Failed to encode transitions")?;
                writeln!(self.output, "{json}")?;
            }
            Format::Text if transitions.is_empty() => {
                writeln!(self.output, "No legal moves.")?;
            }
            Format::Text => {
                for transition in &transitions {
                    writeln!(
                        self.output,
                        "  {} {}",
                        transition.direction().label(),
                        transition
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_history(&mut self) -> Result<()> {
        let history = self.engine.history();
        match self.format {
            Format::Json => {
                let json =
                    serde_json::to_string(history).context("Failed to encode history")?;
                writeln!(self.output, "{json}")?;
            }
            Format::Text if history.is_empty() => {
                writeln!(self.output, "No moves yet.")?;
            }
            Format::Text => {
                for (number, transition) in history.iter().enumerate() {
                    writeln!(self.output, "{:>3}. {}", number + 1, transition)?;
                }
            }
        }
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        match self.format {
            Format::Json => {
                let json = serde_json::json!({ "error": message });
                writeln!(self.output, "{json}")?;
            }
            Format::Text => writeln!(self.output, "{message}")?,
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.format == Format::Text {
            let player = self.engine.active_player();
            write!(self.output, "{player}> ")?;
            self.output.flush().context("Failed to flush output")?;
        }
        Ok(())
    }
}
