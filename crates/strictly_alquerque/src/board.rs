//! The 5x5 alquerque board: hole storage, highlight flags and adjacency.
//!
//! The board knows nothing about the rules. Legality lives in
//! [`crate::rules`]; the board only answers "what is in this hole" and
//! "which hole lies next to it along a link".

use super::position::{BOARD_SIZE, BoardError, CELL_COUNT, Cell, Direction};
use super::types::{CellState, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Characters used to draw the board as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Red piece.
    pub red: char,
    /// Blue piece.
    pub blue: char,
    /// Empty hole.
    pub empty: char,
    /// Empty hole marked as a destination.
    pub target: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            red: 'R',
            blue: 'B',
            empty: '.',
            target: '*',
        }
    }
}

/// 5x5 alquerque board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Hole states in row-major order (0-24).
    cells: [CellState; CELL_COUNT],
    /// Highlight flags in row-major order. Purely a selection hint.
    marked: [bool; CELL_COUNT],
}

impl Board {
    /// Creates a board with the starting layout.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Creates a board with every hole empty.
    pub fn empty() -> Self {
        Self {
            cells: [CellState::Empty; CELL_COUNT],
            marked: [false; CELL_COUNT],
        }
    }

    /// Builds a board from a five-row diagram.
    ///
    /// Each row holds five characters: `R` for red, `B` for blue and `.` for
    /// an empty hole. Whitespace inside a row is ignored.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::UnknownGlyph` for any other character and
    /// `BoardError::RowLength` for rows that do not hold five holes.
    #[instrument]
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let holes = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|glyph| match glyph {
                    'R' | 'r' => Ok(CellState::Occupied(Player::Red)),
                    'B' | 'b' => Ok(CellState::Occupied(Player::Blue)),
                    '.' => Ok(CellState::Empty),
                    glyph => Err(BoardError::UnknownGlyph { glyph }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if holes.len() != BOARD_SIZE {
                return Err(BoardError::RowLength {
                    row,
                    len: holes.len(),
                });
            }
            for (col, state) in holes.into_iter().enumerate() {
                board.cells[row * BOARD_SIZE + col] = state;
            }
        }
        Ok(board)
    }

    /// Restores the starting layout and clears every mark.
    ///
    /// Red fills rows 0-1 and the left half of row 2, Blue the right half of
    /// row 2 and rows 3-4. The center hole stays empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for cell in Cell::all() {
            let (row, col) = (cell.row(), cell.col());
            let state = if row < 2 || (row == 2 && col < 2) {
                CellState::Occupied(Player::Red)
            } else if row > 2 || (row == 2 && col > 2) {
                CellState::Occupied(Player::Blue)
            } else {
                CellState::Empty
            };
            self.cells[cell.to_index()] = state;
        }
        self.clear_marks();
    }

    /// Gets the state of a hole.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.to_index()]
    }

    /// Sets the state of a hole.
    pub fn set(&mut self, cell: Cell, state: CellState) {
        self.cells[cell.to_index()] = state;
    }

    /// Checks if a hole is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Checks if a hole is highlighted.
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.marked[cell.to_index()]
    }

    /// Sets or clears the highlight on a hole.
    pub fn set_marked(&mut self, cell: Cell, marked: bool) {
        self.marked[cell.to_index()] = marked;
    }

    /// Clears every highlight.
    pub fn clear_marks(&mut self) {
        self.marked = [false; CELL_COUNT];
    }

    /// All highlighted holes in row-major order.
    pub fn marked_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_marked(*cell)).collect()
    }

    /// Iterates over every hole and its state in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        Cell::all().map(|cell| (cell, self.get(cell)))
    }

    /// Holes occupied by `player`.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |(_, state)| state.is_owned_by(player))
            .map(|(cell, _)| cell)
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// Directions linked from `cell`.
    pub fn directions(&self, cell: Cell) -> &'static [Direction] {
        cell.directions()
    }

    /// The neighbour of `cell` in `direction`, or `None` past the edge.
    ///
    /// An absent neighbour is the normal board-edge condition, not an error.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction)
    }

    /// Draws the board with link lines between the holes.
    ///
    /// Marked empty holes use the `target` glyph so a selected piece's
    /// destinations stand out.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut lines = Vec::with_capacity(BOARD_SIZE * 2 - 1);
        for row in 0..BOARD_SIZE {
            let mut holes = String::new();
            for col in 0..BOARD_SIZE {
                let cell = Cell::from_index(row * BOARD_SIZE + col);
                let symbol = match cell.map(|cell| (self.get(cell), self.is_marked(cell))) {
                    Some((CellState::Occupied(Player::Red), _)) => glyphs.red,
                    Some((CellState::Occupied(Player::Blue), _)) => glyphs.blue,
                    Some((CellState::Empty, true)) => glyphs.target,
                    _ => glyphs.empty,
                };
                holes.push(symbol);
                if col + 1 < BOARD_SIZE {
                    holes.push('-');
                }
            }
            lines.push(holes);

            if row + 1 < BOARD_SIZE {
                let mut links = String::new();
                for col in 0..BOARD_SIZE {
                    links.push('|');
                    if col + 1 < BOARD_SIZE {
                        links.push(if (row + col) % 2 == 0 { '\\' } else { '/' });
                    }
                }
                lines.push(links);
            }
        }
        lines.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout_counts() {
        let board = Board::new();
        assert_eq!(board.count(Player::Red), 12);
        assert_eq!(board.count(Player::Blue), 12);
        assert!(board.is_empty(Cell::CENTER));
        assert!(board.marked_cells().is_empty());
    }

    #[test]
    fn test_row_two_split() {
        let board = Board::new();
        let red = CellState::Occupied(Player::Red);
        let blue = CellState::Occupied(Player::Blue);
        assert_eq!(board.get(Cell::new(2, 0).unwrap()), red);
        assert_eq!(board.get(Cell::new(2, 1).unwrap()), red);
        assert_eq!(board.get(Cell::new(2, 3).unwrap()), blue);
        assert_eq!(board.get(Cell::new(2, 4).unwrap()), blue);
    }

    #[test]
    fn test_render_starting_layout() {
        let expected = "\
R-R-R-R-R
|\\|/|\\|/|
R-R-R-R-R
|/|\\|/|\\|
R-R-.-B-B
|\\|/|\\|/|
B-B-B-B-B
|/|\\|/|\\|
B-B-B-B-B";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_render_marks_targets() {
        let mut board = Board::new();
        board.set_marked(Cell::CENTER, true);
        let glyphs = Glyphs {
            target: 'o',
            ..Glyphs::default()
        };
        assert!(board.render(&glyphs).contains("R-R-o-B-B"));
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....."]).unwrap();
        assert_eq!(board.count(Player::Red), 1);
        assert_eq!(board.count(Player::Blue), 1);
        assert!(matches!(
            Board::from_rows(["R...", ".....", ".....", ".....", "....."]),
            Err(BoardError::RowLength { row: 0, len: 4 })
        ));
        assert!(matches!(
            Board::from_rows(["X....", ".....", ".....", ".....", "....."]),
            Err(BoardError::UnknownGlyph { glyph: 'X' })
        ));
    }

    #[test]
    fn test_reset_restores_layout_and_clears_marks() {
        let mut board = Board::empty();
        board.set_marked(Cell::CENTER, true);
        board.set(Cell::CENTER, CellState::Occupied(Player::Blue));
        board.reset();
        assert_eq!(board, Board::new());
    }
}
