//! End-of-game detection.

use super::super::board::Board;
use super::super::phases::Exhaustion;
use super::super::types::Player;
use super::catalogue::MoveCatalogue;
use tracing::instrument;

/// Builds `player`'s turn catalogue, or reports why the player cannot play.
///
/// A player without pieces loses before any catalogue is built; a player
/// whose pieces are all blocked loses on an empty catalogue.
#[instrument(skip(board))]
pub fn turn_catalogue(board: &Board, player: Player) -> Result<MoveCatalogue, Exhaustion> {
    if board.count(player) == 0 {
        return Err(Exhaustion::NoPieces);
    }
    let catalogue = MoveCatalogue::build(board, player);
    if catalogue.is_empty() {
        return Err(Exhaustion::NoMoves);
    }
    Ok(catalogue)
}
