//! Turn inference.

use super::super::{Board, Move, Side};
use tracing::instrument;

/// Whose turn it is: `X` when both sides have placed the same number of
/// marks, `O` otherwise. There is no separate turn counter.
#[instrument(skip(board))]
pub fn next_turn(board: &Board) -> Side {
    if board.count(Side::X) == board.count(Side::O) {
        Side::X
    } else {
        Side::O
    }
}

/// Every empty square paired with the side to move.
#[instrument(skip(board))]
pub fn possible_moves(board: &Board) -> Vec<Move> {
    let side = next_turn(board);
    board
        .empty_cells()
        .into_iter()
        .map(|cell| Move::new(side, cell.position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(next_turn(&Board::empty()), Side::X);
    }

    #[test]
    fn test_turns_alternate_along_a_game() {
        let mut board = Board::empty();
        for (ply, pos) in Position::ALL.into_iter().enumerate() {
            let side = next_turn(&board);
            assert_eq!(side, if ply % 2 == 0 { Side::X } else { Side::O });
            board = board.apply_move(Move::new(side, pos));

            let diff = board.count(Side::X) as i64 - board.count(Side::O) as i64;
            assert!(diff == 0 || diff == 1);
        }
    }

    #[test]
    fn test_possible_moves_use_side_to_move() {
        let board = Board::empty().apply_move(Move::new(Side::X, Position::Center));
        let moves = possible_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.side == Side::O));
        assert!(!moves.iter().any(|m| m.position == Position::Center));
    }
}
