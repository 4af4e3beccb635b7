//! Opening book: the reply to the opponent's first mark.

use super::super::{Board, Move, Position, Side};
use tracing::instrument;

/// Book reply when exactly one square is occupied.
///
/// An edge opening is answered in the center, a corner opening in the
/// diagonally opposite corner. A center opening, or any board without
/// exactly one mark, has no book reply.
#[instrument(skip(board))]
pub fn move_second_step(board: &Board, side: Side) -> Option<Move> {
    let occupied: Vec<Position> = board
        .cells()
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.position)
        .collect();

    let [only] = occupied.as_slice() else {
        return None;
    };

    if only.is_edge() {
        Some(Move::new(side, Position::Center))
    } else if only.is_corner() {
        Some(Move::new(side, only.opposite()))
    } else {
        None
    }
}
