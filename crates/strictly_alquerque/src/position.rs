//! Board coordinates and link directions.
//!
//! The alquerque board is a grid of lines: every hole is linked to its
//! orthogonal neighbours, and holes where `row + col` is even are also
//! linked along the diagonals. The link table is fixed by the board
//! topology and computed once at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 5;

/// Number of holes on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Errors raised when addressing the board with raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The coordinates fall outside the 5x5 board.
    #[display("Cell ({row}, {col}) is outside the 5x5 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A board diagram contained a character that is not a piece or a hole.
    #[display("Unknown board glyph {glyph:?}")]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
    },

    /// A board diagram row did not have exactly five holes.
    #[display("Board row {row} has {len} holes, expected 5")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of holes found.
        len: usize,
    },
}

/// One of the eight compass directions a link can follow.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Up.
    North,
    /// Up and right.
    NorthEast,
    /// Right.
    East,
    /// Down and right.
    SouthEast,
    /// Down.
    South,
    /// Down and left.
    SouthWest,
    /// Left.
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row and column step for one hole in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Checks if this is a diagonal direction.
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// Short compass label ("N", "NE", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

const fn link_table() -> [&'static [Direction]; CELL_COUNT] {
    let mut table: [&'static [Direction]; CELL_COUNT] = [&Direction::ORTHOGONAL; CELL_COUNT];
    let mut index = 0;
    while index < CELL_COUNT {
        if (index / BOARD_SIZE + index % BOARD_SIZE) % 2 == 0 {
            table[index] = &Direction::ALL;
        }
        index += 1;
    }
    table
}

/// Valid link directions per hole, in row-major order.
static LINKS: [&[Direction]; CELL_COUNT] = link_table();

/// A hole on the board, always within `[0, 5) x [0, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// The center hole, empty at the start of a game.
    pub const CENTER: Cell = Cell { row: 2, col: 2 };

    /// Creates a cell from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` if either coordinate is 5 or more.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a cell from its row-major index (0-24).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    /// Converts the cell to its row-major index (0-24).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Row of the cell.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column of the cell.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Directions in which this hole is linked to a neighbour line.
    pub fn directions(self) -> &'static [Direction] {
        LINKS[self.to_index()]
    }

    /// Checks if this hole has a link in `direction`.
    pub fn links(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }

    /// The adjacent cell in `direction`, or `None` past the board edge.
    ///
    /// This is pure geometry: it does not consult the link table.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Cell::new(row, col).ok()
    }

    /// Iterates over all 25 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Cell::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row(), cell.col())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
