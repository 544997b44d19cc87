//! Game rules for alquerque.
//!
//! This module contains pure functions over a [`Board`](super::Board):
//! transition legality, speculative scans, the turn catalogue and
//! end-of-game detection. Rules are separated from the engine's turn
//! state so they can be composed into contracts and tested on bare boards.

pub mod catalogue;
pub mod outcome;
pub mod scan;
pub mod transition;

pub use catalogue::MoveCatalogue;
pub use outcome::turn_catalogue;
pub use scan::{Directions, captures_from, find_direction, legal_directions, moves_from};
pub use transition::{apply_transition, commit, probe, try_capture, try_move};
