//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True when no empty cells remain.
///
/// Independent of winner status; callers check for a winner first.
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
}
