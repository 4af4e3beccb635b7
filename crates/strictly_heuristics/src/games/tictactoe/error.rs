//! Error types for tic-tac-toe rules.

use super::lines::LineName;
use super::{Position, Side};

/// Reason a proposed move was rejected by the legality gate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Row outside `0..=2`.
    #[display("Illegal row {}", _0)]
    RowOutOfRange(i64),

    /// Column outside `0..=2`.
    #[display("Illegal col {}", _0)]
    ColOutOfRange(i64),

    /// Side token other than `x` or `o`.
    #[display("Side can only be x or o, got {:?}", _0)]
    InvalidSide(String),

    /// The target square is already occupied.
    #[display("Illegal move: cell {} is already filled", _0)]
    SquareOccupied(Position),

    /// The move's side is not the side to move.
    #[display("Illegal move: {}'s turn, not {}'s", expected, attempted)]
    WrongTurn {
        /// Side whose turn it is.
        expected: Side,
        /// Side that tried to move.
        attempted: Side,
    },

    /// The board already has a winner.
    #[display("Illegal move: game is ended")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

/// A board that cannot arise from legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid board, {} winning lines found:{}", lines.len(), spaced(lines))]
pub struct InvalidState {
    /// Every winning line found on the board.
    pub lines: Vec<LineName>,
}

fn spaced(names: &[LineName]) -> String {
    names.iter().map(|name| format!(" {name}")).collect()
}

impl std::error::Error for InvalidState {}

/// Error from operations that both commit moves and read the outcome.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// A move failed the legality gate.
    #[display("{}", _0)]
    IllegalMove(IllegalMove),

    /// The board holds more than one winning line.
    #[display("{}", _0)]
    InvalidState(InvalidState),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::IllegalMove(e) => Some(e),
            EngineError::InvalidState(e) => Some(e),
        }
    }
}

/// Failure to parse a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text does not hold exactly 9 cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A cell symbol other than `x`, `o` or `.`.
    #[display("unknown cell symbol {:?} at cell {}", symbol, index)]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// Row-major cell index.
        index: usize,
    },
}

impl std::error::Error for BoardParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_messages() {
        assert_eq!(IllegalMove::RowOutOfRange(3).to_string(), "Illegal row 3");
        assert_eq!(
            IllegalMove::WrongTurn {
                expected: Side::X,
                attempted: Side::O
            }
            .to_string(),
            "Illegal move: x's turn, not o's"
        );
        assert!(
            IllegalMove::SquareOccupied(Position::Center)
                .to_string()
                .contains("already filled")
        );
    }

    #[test]
    fn test_invalid_state_lists_lines() {
        let err = InvalidState {
            lines: vec![LineName::Row(0), LineName::Row(1)],
        };
        assert_eq!(err.to_string(), "Invalid board, 2 winning lines found: row:0 row:1");
    }

    #[test]
    fn test_engine_error_wraps_source() {
        use std::error::Error;

        let err = EngineError::from(IllegalMove::GameOver);
        assert_eq!(err.to_string(), "Illegal move: game is ended");
        assert!(err.source().is_some());
    }
}
