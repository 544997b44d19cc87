//! Notifications the engine hands back to its front end.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Something the front end may want to react to.
///
/// Events are returned in the order they happened. An input that changes
/// nothing returns no events at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Hole states or marks changed; re-render the board.
    BoardChanged,
    /// The active player's turn is over.
    TurnEnded,
    /// A new player is to move.
    PlayerSwitched(Player),
    /// The game is over.
    GameOver(Player),
}

/// Front-end callbacks, one per event.
///
/// Every method defaults to doing nothing, so a presenter only implements
/// what it renders.
pub trait Presenter {
    /// Hole states or marks changed.
    fn board_changed(&mut self) {}

    /// The active player's turn is over.
    fn turn_ended(&mut self) {}

    /// `player` is now to move.
    fn player_switched(&mut self, _player: Player) {}

    /// `winner` won the game.
    fn game_over(&mut self, _winner: Player) {}
}

/// Feeds events to a presenter in order.
pub fn dispatch<P: Presenter + ?Sized>(events: &[Event], presenter: &mut P) {
    for event in events {
        match *event {
            Event::BoardChanged => presenter.board_changed(),
            Event::TurnEnded => presenter.turn_ended(),
            Event::PlayerSwitched(player) => presenter.player_switched(player),
            Event::GameOver(winner) => presenter.game_over(winner),
        }
    }
}
