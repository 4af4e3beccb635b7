//! Strictly Heuristics - a rule-based tic-tac-toe engine
//!
//! Given a board, the engine works out whose turn it is, validates proposed
//! moves, detects wins and picks one move for the side to move using a fixed
//! ladder of heuristics. There is no game-tree search.
//!
//! # Architecture
//!
//! - **Board model**: immutable [`Board`] values, [`Position`], [`Cell`]
//! - **Rules**: lines, turn inference, winner and tie detection, the
//!   [`verify_move`] legality gate
//! - **Strategy**: heuristic primitives and the [`decide`] pipeline
//! - **Engine**: [`Engine`] bundles the trace sink and tie-breaker behind
//!   the public API
//!
//! # Example
//!
//! ```
//! use strictly_heuristics::{Engine, MoveRequest, Side};
//!
//! let mut engine = Engine::seeded(7);
//! let board = engine.new_board(false);
//! let board = engine.set_move(&board, &MoveRequest::new("x", 1, 1)).unwrap();
//!
//! let reply = engine.calculate_move(&board).unwrap();
//! assert_eq!(reply.side, Side::O);
//! assert!(!reply.position.is_center());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod engine_config;
mod games;
mod tie_break;
mod trace;

// Crate-level exports - Engine
pub use engine::Engine;
pub use engine_config::{ConfigError, EngineConfig};

// Crate-level exports - Tie-breaking and tracing
pub use tie_break::{FirstCandidate, RandomTieBreaker, TieBreaker, pick_one};
pub use trace::{NoopSink, TraceSink, TracingSink, format_line};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardConsistent, BoardParseError, Cell, EngineError, GameStatus, IllegalMove,
    InvalidState, LegalMove, Line, LineName, Move, MoveRequest, Position, Side, Square, Winner,
    lines, set_move, verify_move,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{
    has_winner, is_full, is_tie, is_winning_line, is_won_by, next_turn, possible_moves, status,
    winner, winning_lines,
};

// Crate-level exports - Strategy
pub use games::tictactoe::strategy::{
    Confidence, Decision, Strategy, all_two_empty_cell_pairs, calculate_move, decide,
    has_confidence, move_avoid_center, move_second_step, move_to_block, move_to_confidence,
    move_to_corner, move_to_win, move_two_steps_confidence, moves_to_win,
};
