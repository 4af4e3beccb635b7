//! Contract-based validation for tic-tac-toe moves.
//!
//! Each precondition is its own small check so the legality gate reads as
//! the list of rules it enforces. [`verify_move`] runs them in order and
//! reports the first one that fails.

use super::error::IllegalMove;
use super::rules::{has_winner, next_turn};
use super::{Board, Move, MoveRequest, Side};
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: row and column are in range and the side token is known.
pub struct WellFormed;

impl WellFormed {
    /// Converts the request into a typed move.
    pub fn check(request: &MoveRequest) -> Result<Move, IllegalMove> {
        request.structural_move()
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, board: &Board) -> Result<(), IllegalMove> {
        if !board.is_empty(mov.position) {
            Err(IllegalMove::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Rejects moves by the side that is not to move.
    pub fn check(mov: &Move, board: &Board) -> Result<(), IllegalMove> {
        let expected = next_turn(board);
        if mov.side != expected {
            Err(IllegalMove::WrongTurn {
                expected,
                attempted: mov.side,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: Nobody has completed a line yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the board has a winner.
    pub fn check(board: &Board) -> Result<(), IllegalMove> {
        if has_winner(board) {
            Err(IllegalMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every rule a committed move must satisfy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    pub fn check(request: &MoveRequest, board: &Board) -> Result<Move, IllegalMove> {
        let mov = WellFormed::check(request)?;
        SquareIsEmpty::check(&mov, board)?;
        SidesTurn::check(&mov, board)?;
        GameNotOver::check(board)?;
        Ok(mov)
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: x has placed as many marks as o, or one more.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the invariant, logging a warning when it does not hold.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Side::X);
        let o_count = board.count(Side::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Legality gate
// ─────────────────────────────────────────────────────────────

/// Validates a proposed move against the board.
///
/// Checks, in order: row, column, side token, empty target, turn, and that
/// the game has no winner yet. Returns the typed move on success.
#[instrument(skip(board), fields(side = %request.side, row = request.row, col = request.col))]
pub fn verify_move(board: &Board, request: &MoveRequest) -> Result<Move, IllegalMove> {
    LegalMove::check(request, board).inspect_err(|e| debug!(error = %e, "Move rejected"))
}

/// Validates then applies a move, returning the new board.
#[instrument(skip(board), fields(side = %request.side, row = request.row, col = request.col))]
pub fn set_move(board: &Board, request: &MoveRequest) -> Result<Board, IllegalMove> {
    let mov = verify_move(board, request)?;
    let next = board.apply_move(mov);
    if cfg!(debug_assertions) && !BoardConsistent::holds(&next) {
        debug!(%mov, "Move committed onto an unbalanced board");
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_legal_first_move() {
        let board = Board::empty();
        let mov = verify_move(&board, &MoveRequest::new("x", 1, 1)).unwrap();
        assert_eq!(mov, Move::new(Side::X, Position::Center));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::empty();
        assert_eq!(
            verify_move(&board, &MoveRequest::new("x", 3, 0)),
            Err(IllegalMove::RowOutOfRange(3))
        );
        assert_eq!(
            verify_move(&board, &MoveRequest::new("x", 0, -1)),
            Err(IllegalMove::ColOutOfRange(-1))
        );
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(
            verify_move(&Board::empty(), &MoveRequest::new("y", 0, 0)),
            Err(IllegalMove::InvalidSide("y".to_string()))
        );
    }

    #[test]
    fn test_occupied_square() {
        let board = set_move(&Board::empty(), &MoveRequest::new("x", 1, 1)).unwrap();
        assert_eq!(
            verify_move(&board, &MoveRequest::new("o", 1, 1)),
            Err(IllegalMove::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_wrong_turn() {
        assert_eq!(
            verify_move(&Board::empty(), &MoveRequest::new("o", 1, 1)),
            Err(IllegalMove::WrongTurn {
                expected: Side::X,
                attempted: Side::O
            })
        );
    }

    #[test]
    fn test_game_over() {
        let board: Board = "xxx/oo./...".parse().unwrap();
        assert_eq!(
            verify_move(&board, &MoveRequest::new("o", 1, 2)),
            Err(IllegalMove::GameOver)
        );
    }

    #[test]
    fn test_failed_move_leaves_board_alone() {
        let board = Board::empty();
        assert!(set_move(&board, &MoveRequest::new("o", 0, 0)).is_err());
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&Board::empty()));
        assert!(BoardConsistent::holds(&"x../.../...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"o../.../...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"xx./.../...".parse().unwrap()));
    }

    #[test]
    fn test_unbalanced_board_still_commits() {
        // three x against none: o is to move, the result stays unbalanced
        let board: Board = "xx./x../...".parse().unwrap();
        let next = set_move(&board, &MoveRequest::new("o", 2, 2)).unwrap();
        assert_eq!(next.count(Side::O), 1);
        assert!(!BoardConsistent::holds(&next));
    }
}
