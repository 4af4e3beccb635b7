//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::error::BoardParseError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Side x (moves first).
    X,
    /// Side o (moves second).
    O,
}

impl Side {
    /// Returns the opponent side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// The single-character token for this side.
    pub fn token(self) -> char {
        match self {
            Side::X => 'x',
            Side::O => 'o',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// The occupying side, if any.
    pub fn occupant(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(side) => Some(side),
        }
    }
}

/// A coordinate together with its occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell is.
    pub position: Position,
    /// What occupies it.
    pub square: Square,
}

impl Cell {
    /// The occupying side, if any.
    pub fn occupant(&self) -> Option<Side> {
        self.square.occupant()
    }

    /// True when no side occupies the cell.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every operation that places a mark returns a
/// new board and leaves the receiver untouched, so the same board can be
/// explored hypothetically and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a board with all 9 cells empty.
    pub fn empty() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// The 9 cells in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        Position::ALL
            .iter()
            .map(|&position| Cell {
                position,
                square: self.get(position),
            })
            .collect()
    }

    /// The unoccupied cells, order preserved.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells().into_iter().filter(Cell::is_empty).collect()
    }

    /// Number of cells occupied by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(side))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a new board with the move's side placed on its target.
    ///
    /// No legality checks: this is the structural update used both for
    /// committed moves and for what-if exploration.
    pub fn apply_move(&self, action: Move) -> Self {
        let mut next = *self;
        next.squares[action.position.index()] = Square::Occupied(action.side);
        next
    }

    /// Formats the board as rows of `x`, `o` and `.`, each ending in a newline.
    #[instrument(skip(self))]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.squares.chunks(3) {
            for square in row {
                let symbol = match square {
                    Square::Empty => '.',
                    Square::Occupied(side) => side.token(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the rendered form. Rows may be separated by newlines or `/`;
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != 9 {
            return Err(BoardParseError::WrongCellCount(symbols.len()));
        }

        let mut board = Board::empty();
        for (idx, symbol) in symbols.into_iter().enumerate() {
            board.squares[idx] = match symbol.to_ascii_lowercase() {
                '.' | '-' | '_' => Square::Empty,
                'x' => Square::Occupied(Side::X),
                'o' => Square::Occupied(Side::O),
                other => {
                    return Err(BoardParseError::UnknownSymbol {
                        symbol: other,
                        index: idx,
                    });
                }
            };
        }
        Ok(board)
    }
}
