//! The alquerque turn engine.
//!
//! [`GameEngine`] owns the board and drives one game through a single
//! inbound operation, [`GameEngine::select_cell`]. Each call runs the whole
//! cascade to completion (move, capture-sequence check, turn switch,
//! game-over check) and returns the events the front end should react to.
//!
//! Clicks that are not actionable are ignored and return no events.
//! Broken internal invariants panic: they indicate a bug in catalogue
//! construction, never bad input.

use super::action::{Transition, TransitionKind};
use super::board::Board;
use super::contracts::assert_invariants;
use super::event::Event;
use super::phases::{Outcome, Phase};
use super::position::{BoardError, Cell};
use super::rules::{self, MoveCatalogue};
use super::snapshot::Snapshot;
use super::types::{CellState, Mode, Player};
use tracing::{debug, info, instrument};

/// Alquerque rule engine and turn state machine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) player: Player,
    pub(crate) catalogue: MoveCatalogue,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Transition>,
}

impl GameEngine {
    /// Creates an engine with the starting layout, Red to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Red)
    }

    /// Creates an engine from an arbitrary position.
    ///
    /// Marks on `board` are discarded. If `player` cannot move, the engine
    /// starts out in [`Phase::GameOver`].
    #[instrument(skip(board))]
    pub fn from_board(board: Board, player: Player) -> Self {
        let mut engine = Self {
            board,
            player,
            catalogue: MoveCatalogue::default(),
            phase: Phase::NoSelection,
            history: Vec::new(),
        };
        engine.start_turn(&mut Vec::new());
        assert_invariants(&engine);
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Inbound operations
    // ─────────────────────────────────────────────────────────────

    /// Restores the starting layout with Red to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<Event> {
        info!("Resetting game");
        self.board.reset();
        self.player = Player::Red;
        self.history.clear();

        let mut events = vec![Event::BoardChanged, Event::PlayerSwitched(self.player)];
        self.start_turn(&mut events);
        assert_invariants(self);
        events
    }

    /// Handles a click on raw board coordinates.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` for coordinates off the board.
    #[instrument(skip(self))]
    pub fn select(&mut self, row: usize, col: usize) -> Result<Vec<Event>, BoardError> {
        let cell = Cell::new(row, col)?;
        Ok(self.select_cell(cell))
    }

    /// Handles a click on `target`.
    ///
    /// - With nothing picked up, a selectable piece is picked up.
    /// - With a piece picked up, a marked empty hole plays the move or
    ///   capture; another selectable piece is picked up instead, unless a
    ///   capture sequence is in progress.
    /// - After the game is over, the game restarts and the click applies to
    ///   the fresh board.
    ///
    /// Anything else is ignored and returns no events.
    #[instrument(skip(self), fields(player = %self.player, phase = ?self.phase))]
    pub fn select_cell(&mut self, target: Cell) -> Vec<Event> {
        let events = match self.phase {
            Phase::GameOver(outcome) => {
                info!(%outcome, "Input after game over, starting a new game");
                let mut events = self.reset();
                events.extend(self.select_cell(target));
                events
            }
            Phase::NoSelection => {
                if !self.catalogue.contains(target) {
                    debug!(%target, "Not selectable, ignoring");
                    return Vec::new();
                }
                self.pick(target, false);
                vec![Event::BoardChanged]
            }
            Phase::Selected { cell, sequence } => {
                let state = self.board.get(target);
                let marked = self.board.is_marked(target);
                if marked && state.is_empty() {
                    let mut events = Vec::new();
                    self.play(cell, target, &mut events);
                    events
                } else if !sequence && marked && target != cell && state.is_owned_by(self.player) {
                    debug_assert!(self.catalogue.contains(target));
                    self.release(cell);
                    self.pick(target, false);
                    vec![Event::BoardChanged]
                } else {
                    debug!(%target, sequence, "Not actionable, ignoring");
                    return Vec::new();
                }
            }
        };
        assert_invariants(self);
        events
    }

    // ─────────────────────────────────────────────────────────────
    //  Query surface
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State of a hole.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.board.get(cell)
    }

    /// Checks if a hole is highlighted.
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.board.is_marked(cell)
    }

    /// The player to move (or, after game over, the player who could not).
    pub fn active_player(&self) -> Player {
        self.player
    }

    /// Whether this turn is played with moves or captures.
    pub fn mode(&self) -> Mode {
        self.catalogue.mode()
    }

    /// Current phase of the turn.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The picked-up piece, if any.
    pub fn selection(&self) -> Option<Cell> {
        self.phase.selection()
    }

    /// Checks if a capture sequence is in progress.
    pub fn in_sequence(&self) -> bool {
        self.phase.in_sequence()
    }

    /// The active player's legal-move catalogue.
    pub fn catalogue(&self) -> &MoveCatalogue {
        &self.catalogue
    }

    /// Checks if `cell` holds a piece the active player may pick up.
    pub fn is_selectable(&self, cell: Cell) -> bool {
        self.catalogue.contains(cell)
    }

    /// Checks if the game is over.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.phase.outcome().map(|outcome| outcome.winner)
    }

    /// Transitions played since the last reset.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// One-line status for a status bar.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::GameOver(outcome) => outcome.to_string(),
            Phase::Selected { sequence: true, .. } => {
                format!("{} to move, continue capturing", self.player)
            }
            _ => match self.catalogue.mode() {
                Mode::Eating => format!("{} to move, capture required", self.player),
                Mode::Moving => format!("{} to move", self.player),
            },
        }
    }

    /// Serializable view of the whole engine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Turn state machine
    // ─────────────────────────────────────────────────────────────

    /// Builds the catalogue for the active player and marks selectable pieces.
    #[instrument(skip(self, events), fields(player = %self.player))]
    fn start_turn(&mut self, events: &mut Vec<Event>) {
        self.board.clear_marks();
        match rules::turn_catalogue(&self.board, self.player) {
            Ok(catalogue) => {
                for cell in catalogue.cells() {
                    self.board.set_marked(cell, true);
                }
                debug!(mode = %catalogue.mode(), selectable = catalogue.len(), "Turn started");
                self.catalogue = catalogue;
                self.phase = Phase::NoSelection;
            }
            Err(reason) => {
                let outcome = Outcome {
                    winner: self.player.opponent(),
                    reason,
                };
                info!(%outcome, "Game over");
                self.catalogue = MoveCatalogue::default();
                self.phase = Phase::GameOver(outcome);
                events.push(Event::GameOver(outcome.winner));
            }
        }
    }

    /// Picks up `cell` and marks its destinations.
    fn pick(&mut self, cell: Cell, sequence: bool) {
        self.board.set_marked(cell, true);
        for target in self.catalogue.destinations(&self.board, self.player, cell) {
            self.board.set_marked(target, true);
        }
        debug!(%cell, sequence, "Piece selected");
        self.phase = Phase::Selected { cell, sequence };
    }

    /// Puts `cell` back down, unmarking its destinations.
    ///
    /// The piece itself stays marked as selectable.
    fn release(&mut self, cell: Cell) {
        for target in self.catalogue.destinations(&self.board, self.player, cell) {
            self.board.set_marked(target, false);
        }
        self.phase = Phase::NoSelection;
    }

    /// Plays the selected piece onto `target` and runs the consequences.
    fn play(&mut self, from: Cell, target: Cell, events: &mut Vec<Event>) {
        let Some(transition) = self.catalogue.resolve(&self.board, self.player, from, target) else {
            unreachable!("marked destination {target} does not resolve from {from}");
        };
        if let Err(reason) = rules::commit(&mut self.board, &transition) {
            unreachable!("catalogued transition {transition} rejected: {reason}");
        }
        info!(%transition, "Transition played");
        self.history.push(transition);
        self.board.clear_marks();
        events.push(Event::BoardChanged);

        match transition.kind() {
            TransitionKind::Move => self.end_turn(events),
            TransitionKind::Capture => {
                let landing = transition.to();
                let follow_up = rules::captures_from(&self.board, self.player, landing);
                if follow_up.is_empty() {
                    self.end_turn(events);
                } else {
                    debug!(%landing, captures = follow_up.len(), "Capture sequence continues");
                    self.catalogue = MoveCatalogue::single(Mode::Eating, landing, follow_up);
                    self.pick(landing, true);
                }
            }
        }
    }

    /// Hands the turn to the other player.
    fn end_turn(&mut self, events: &mut Vec<Event>) {
        info!(player = %self.player, "Turn ended");
        events.push(Event::TurnEnded);
        self.player = self.player.opponent();
        events.push(Event::PlayerSwitched(self.player));
        self.start_turn(events);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
