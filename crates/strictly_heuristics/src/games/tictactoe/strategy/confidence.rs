//! Fork ("confidence") detection and search.
//!
//! A side has confidence when it holds two or more distinct winning
//! squares at once: the opponent can block only one of them.

use super::super::rules::is_won_by;
use super::super::{Board, Move, Side};
use super::primitives::{all_two_empty_cell_pairs, candidate_moves, moves_to_win};
use crate::tie_break::{TieBreaker, pick_one};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of searching for a fork-creating move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// The side already has a fork; no move is needed to create one.
    AlreadyConfident,
    /// Playing this move gives the side a fork.
    Found(Move),
    /// No single move creates a fork.
    NotFound,
}

impl Confidence {
    /// The move, when one was found.
    pub fn found(self) -> Option<Move> {
        match self {
            Confidence::Found(mov) => Some(mov),
            Confidence::AlreadyConfident | Confidence::NotFound => None,
        }
    }
}

/// True when `side` has more than one immediate winning square.
pub fn has_confidence(board: &Board, side: Side) -> bool {
    moves_to_win(board, side).len() > 1
}

/// A move after which `side` has a fork.
#[instrument(skip(board, breaker))]
pub fn move_to_confidence<B>(board: &Board, side: Side, breaker: &mut B) -> Confidence
where
    B: TieBreaker + ?Sized,
{
    if has_confidence(board, side) {
        return Confidence::AlreadyConfident;
    }

    let forks: Vec<Move> = candidate_moves(board, side)
        .filter(|mov| has_confidence(&board.apply_move(*mov), side))
        .collect();
    debug!(candidates = forks.len(), "Fork-creating moves");

    pick_one(breaker, &forks).map_or(Confidence::NotFound, Confidence::Found)
}

/// First half of a two-move plan that ends in a fork.
///
/// A pair of empty squares qualifies when `side` holding both has a fork,
/// while neither square alone nor the pair together completes a line.
/// From each pair only the squares that, played alone, leave `side` without
/// a winning move are kept, so the plan does not show a threat the opponent
/// would simply block.
#[instrument(skip(board, breaker))]
pub fn move_two_steps_confidence<B>(board: &Board, side: Side, breaker: &mut B) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    let mut first_steps: Vec<Move> = Vec::new();

    for (a, b) in all_two_empty_cell_pairs(board) {
        let first = Move::new(side, a);
        let second = Move::new(side, b);
        let after_first = board.apply_move(first);
        let after_second = board.apply_move(second);
        let after_both = after_first.apply_move(second);

        if is_won_by(&after_first, side)
            || is_won_by(&after_second, side)
            || is_won_by(&after_both, side)
            || !has_confidence(&after_both, side)
        {
            continue;
        }

        for (mov, alone) in [(first, after_first), (second, after_second)] {
            if moves_to_win(&alone, side).is_empty() && !first_steps.contains(&mov) {
                first_steps.push(mov);
            }
        }
    }
    debug!(candidates = first_steps.len(), "Two-step fork openings");

    pick_one(breaker, &first_steps)
}
