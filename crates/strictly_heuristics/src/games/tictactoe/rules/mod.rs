//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the legality gate and the strategy layer share them.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_tie};
pub use turn::{next_turn, possible_moves};
pub use win::{
    GameStatus, Winner, has_winner, is_winning_line, is_won_by, status, winner, winning_lines,
};
