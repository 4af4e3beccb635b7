//! First-class action types for tic-tac-toe.
//!
//! A [`MoveRequest`] is what callers propose: a raw side token and signed
//! coordinates, exactly as they arrived. A [`Move`] is the typed form the
//! engine works with; it can only name a real side and an in-range square.

use super::error::IllegalMove;
use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
///
/// Serializes as `{"side":"x","row":0,"col":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoveRequest", try_from = "MoveRequest")]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }

    /// The same target square claimed by another side.
    pub fn relabel(self, side: Side) -> Self {
        Self { side, ..self }
    }

    /// Converts to the raw request form.
    pub fn to_request(self) -> MoveRequest {
        self.into()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.side, self.position)
    }
}

/// An unvalidated move proposal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Side token, expected to be `x` or `o`.
    pub side: String,
    /// Row, expected in `0..=2`.
    pub row: i64,
    /// Column, expected in `0..=2`.
    pub col: i64,
}

impl MoveRequest {
    /// Creates a new move request.
    pub fn new(side: impl Into<String>, row: i64, col: i64) -> Self {
        Self {
            side: side.into(),
            row,
            col,
        }
    }

    /// Parses the side token.
    pub fn parse_side(&self) -> Result<Side, IllegalMove> {
        match self.side.as_str() {
            "x" => Ok(Side::X),
            "o" => Ok(Side::O),
            other => Err(IllegalMove::InvalidSide(other.to_string())),
        }
    }

    /// Checks row, column and side token in that order.
    pub(crate) fn structural_move(&self) -> Result<Move, IllegalMove> {
        if !(0..=2).contains(&self.row) {
            return Err(IllegalMove::RowOutOfRange(self.row));
        }
        if !(0..=2).contains(&self.col) {
            return Err(IllegalMove::ColOutOfRange(self.col));
        }
        let side = self.parse_side()?;
        let position = Position::from_coords(self.row, self.col)
            .ok_or(IllegalMove::RowOutOfRange(self.row))?;
        Ok(Move::new(side, position))
    }
}

impl From<Move> for MoveRequest {
    fn from(action: Move) -> Self {
        Self::new(
            action.side.to_string(),
            action.position.row() as i64,
            action.position.col() as i64,
        )
    }
}

impl TryFrom<MoveRequest> for Move {
    type Error = IllegalMove;

    /// Structural checks only (coordinates, side token); board-dependent
    /// legality lives in `verify_move`.
    fn try_from(request: MoveRequest) -> Result<Self, Self::Error> {
        request.structural_move()
    }
}

impl std::str::FromStr for MoveRequest {
    type Err = String;

    /// Parses `side:row,col`, e.g. `x:2,0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, coords) = s
            .split_once(':')
            .ok_or_else(|| format!("expected side:row,col, got {s:?}"))?;
        let (row, col) = coords
            .split_once(',')
            .ok_or_else(|| format!("expected row,col after ':', got {coords:?}"))?;
        let row = row
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("bad row {row:?}: {e}"))?;
        let col = col
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("bad col {col:?}: {e}"))?;
        Ok(Self::new(side.trim(), row, col))
    }
}
