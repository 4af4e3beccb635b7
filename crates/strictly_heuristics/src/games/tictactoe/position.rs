//! Board coordinates for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Only the nine in-range coordinates are representable. Raw, possibly
/// out-of-range coordinates arrive through [`MoveRequest`](super::MoveRequest)
/// and are converted with [`Position::from_coords`] by the legality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8, row-major).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column, `None` when either is outside `0..=2`.
    pub fn from_coords(row: i64, col: i64) -> Option<Self> {
        if !(0..=2).contains(&row) || !(0..=2).contains(&col) {
            return None;
        }
        Self::from_index((row * 3 + col) as usize)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// True for the four corners (row and col both differ from 1).
    pub fn is_corner(self) -> bool {
        self.row() != 1 && self.col() != 1
    }

    /// True for the four edge midpoints (exactly one of row, col is 1).
    pub fn is_edge(self) -> bool {
        (self.row() == 1) != (self.col() == 1)
    }

    /// True for the center square.
    pub fn is_center(self) -> bool {
        self == Position::Center
    }

    /// Point reflection through the center.
    ///
    /// Corners map to the diagonally opposite corner, edges to the
    /// opposite edge and the center to itself.
    pub fn opposite(self) -> Self {
        Self::ALL[8 - self.index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}
