//! The eight three-in-a-row lines of the board.

use super::{Board, Cell, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identifies one of the 8 lines.
///
/// Displays as `row:N`, `col:N` or `cross:N`, where `cross:0` is the main
/// diagonal (top-left to bottom-right) and `cross:1` the anti-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineName {
    /// Row 0-2.
    Row(usize),
    /// Column 0-2.
    Col(usize),
    /// Diagonal 0 or 1.
    Cross(usize),
}

impl std::fmt::Display for LineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineName::Row(n) => write!(f, "row:{n}"),
            LineName::Col(n) => write!(f, "col:{n}"),
            LineName::Cross(n) => write!(f, "cross:{n}"),
        }
    }
}

/// A read-only view of three cells in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Which line this is.
    pub name: LineName,
    /// The three cells, ordered by row (then column for rows).
    pub cells: [Cell; 3],
}

impl Line {
    const LAYOUT: [(LineName, [Position; 3]); 8] = [
        // Rows
        (
            LineName::Row(0),
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
        ),
        (
            LineName::Row(1),
            [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        ),
        (
            LineName::Row(2),
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        ),
        // Columns
        (
            LineName::Col(0),
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        ),
        (
            LineName::Col(1),
            [Position::TopCenter, Position::Center, Position::BottomCenter],
        ),
        (
            LineName::Col(2),
            [Position::TopRight, Position::MiddleRight, Position::BottomRight],
        ),
        // Diagonals
        (
            LineName::Cross(0),
            [Position::TopLeft, Position::Center, Position::BottomRight],
        ),
        (
            LineName::Cross(1),
            [Position::TopRight, Position::Center, Position::BottomLeft],
        ),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.cells.map(|cell| cell.position)
    }

    /// The side holding all three cells, if any.
    pub fn owner(&self) -> Option<Side> {
        let [a, b, c] = self.cells.map(|cell| cell.occupant());
        match a {
            Some(side) if b == a && c == a => Some(side),
            _ => None,
        }
    }
}

/// All 8 lines of the board: rows 0-2, columns 0-2, then both diagonals.
#[instrument(skip(board))]
pub fn lines(board: &Board) -> [Line; 8] {
    Line::LAYOUT.map(|(name, positions)| Line {
        name,
        cells: positions.map(|position| Cell {
            position,
            square: board.get(position),
        }),
    })
}
