//! Turns engine events into terminal messages.

use strictly_alquerque::{Player, Presenter};
use tracing::debug;

/// Collects what the terminal should show after an input.
///
/// The session drains it once per handled line.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    redraw: bool,
    messages: Vec<String>,
}

impl ConsolePresenter {
    /// Creates an empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the board needs redrawing and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Takes the pending messages in arrival order.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Presenter for ConsolePresenter {
    fn board_changed(&mut self) {
        self.redraw = true;
    }

    fn turn_ended(&mut self) {
        debug!("Turn ended");
    }

    fn player_switched(&mut self, player: Player) {
        self.messages.push(format!("{player}'s turn."));
    }

    fn game_over(&mut self, winner: Player) {
        self.messages.push(format!("Congratulations, {winner} wins!"));
        self.messages
            .push("Enter any cell to start a new game.".to_string());
    }
}
