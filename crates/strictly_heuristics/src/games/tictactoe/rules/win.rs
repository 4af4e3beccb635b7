//! Win detection logic for tic-tac-toe.

use super::super::error::InvalidState;
use super::super::lines::{Line, lines};
use super::super::{Board, Side};
use super::draw::is_tie;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// The side holding a completed line, and that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The winning side.
    pub side: Side,
    /// The completed line.
    pub line: Line,
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Empty squares remain and nobody has won.
    InProgress,
    /// One side completed a line.
    Won(Winner),
    /// The board is full with no winner.
    Tie,
}

/// True when all three cells hold the same side.
pub fn is_winning_line(line: &Line) -> bool {
    line.owner().is_some()
}

/// Every completed line on the board.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<Line> {
    lines(board).into_iter().filter(is_winning_line).collect()
}

/// True when at least one line is complete.
#[instrument(skip(board))]
pub fn has_winner(board: &Board) -> bool {
    lines(board).iter().any(is_winning_line)
}

/// True when `side` holds at least one complete line.
///
/// Total over every board, including boards with several complete lines,
/// which makes it the check used for hypothetical placements.
pub fn is_won_by(board: &Board, side: Side) -> bool {
    lines(board).iter().any(|line| line.owner() == Some(side))
}

/// The winner, if exactly one line is complete.
///
/// Two or more complete lines cannot be reached by alternating legal moves
/// and are reported as [`InvalidState`] rather than resolved to one of them.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Result<Option<Winner>, InvalidState> {
    let won = winning_lines(board);
    match won.as_slice() {
        [] => Ok(None),
        [line] => Ok(line.owner().map(|side| Winner { side, line: *line })),
        _ => {
            warn!(count = won.len(), "Board has more than one winning line");
            Err(InvalidState {
                lines: won.iter().map(|line| line.name).collect(),
            })
        }
    }
}

/// Winner first, then tie, otherwise still in progress.
#[instrument(skip(board))]
pub fn status(board: &Board) -> Result<GameStatus, InvalidState> {
    if let Some(w) = winner(board)? {
        return Ok(GameStatus::Won(w));
    }
    if is_tie(board) {
        return Ok(GameStatus::Tie);
    }
    Ok(GameStatus::InProgress)
}
