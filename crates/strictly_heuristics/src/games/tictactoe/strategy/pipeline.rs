//! The ordered move-selection pipeline.

use super::super::rules::{has_winner, next_turn};
use super::super::{Board, Move, Side};
use super::confidence::{move_to_confidence, move_two_steps_confidence};
use super::opening::move_second_step;
use super::primitives::{move_avoid_center, move_to_block, move_to_corner, move_to_win};
use crate::tie_break::TieBreaker;
use crate::trace::{TraceSink, emit};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Pipeline steps, in priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Strategy {
    /// Empty board: open in a corner.
    #[strum(serialize = "Empty board, corner opening")]
    CornerOpening,
    /// Book reply to the opponent's first mark.
    #[strum(serialize = "Second step from the opening book")]
    SecondStep,
    /// Complete a line.
    #[strum(serialize = "Found a move to win")]
    Win,
    /// Occupy the opponent's winning square.
    #[strum(serialize = "Found a move to block")]
    Block,
    /// Occupy the square that would give the opponent a fork.
    #[strum(serialize = "Found a move to deny the opponent's fork")]
    DenyFork,
    /// Create a fork.
    #[strum(serialize = "Found a move to build a fork")]
    BuildFork,
    /// Start a two-move plan ending in a fork.
    #[strum(serialize = "Found a 2-step move to a fork")]
    TwoStepFork,
    /// Anything but the center.
    #[strum(serialize = "Try avoiding center")]
    AvoidCenter,
}

/// A chosen move and the step that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Step that produced the move.
    pub strategy: Strategy,
    /// The move to play.
    pub action: Move,
}

/// Picks one move for the side to move, or `None` when the game is won or
/// the board is full.
#[instrument(skip_all)]
pub fn decide<B>(board: &Board, breaker: &mut B, sink: &dyn TraceSink) -> Option<Decision>
where
    B: TieBreaker + ?Sized,
{
    if has_winner(board) {
        debug!("Board already has a winner");
        return None;
    }

    let side = next_turn(board);
    emit(sink, &format!("Calculating move for {side}"));

    let chosen = if board.occupied() == 0 {
        move_to_corner(board, side, breaker).map(|m| (Strategy::CornerOpening, m))
    } else {
        heuristic_move(board, side, breaker)
    };

    let Some((strategy, action)) = chosen else {
        debug!(%side, "No strategy produced a move");
        return None;
    };

    let rendered = serde_json::to_string(&action).unwrap_or_else(|_| action.to_string());
    emit(sink, &format!("{strategy} for {side}: {rendered}"));
    debug!(%strategy, %action, "Move chosen");

    Some(Decision { strategy, action })
}

/// Steps 4 onward, first hit wins.
fn heuristic_move<B>(board: &Board, side: Side, breaker: &mut B) -> Option<(Strategy, Move)>
where
    B: TieBreaker + ?Sized,
{
    if let Some(m) = move_second_step(board, side) {
        return Some((Strategy::SecondStep, m));
    }
    if let Some(m) = move_to_win(board, side, breaker) {
        return Some((Strategy::Win, m));
    }
    if let Some(m) = move_to_block(board, side, breaker) {
        return Some((Strategy::Block, m));
    }
    if let Some(m) = move_to_confidence(board, side.opponent(), breaker).found() {
        return Some((Strategy::DenyFork, m.relabel(side)));
    }
    if let Some(m) = move_to_confidence(board, side, breaker).found() {
        return Some((Strategy::BuildFork, m));
    }
    if let Some(m) = move_two_steps_confidence(board, side, breaker) {
        return Some((Strategy::TwoStepFork, m));
    }
    move_avoid_center(board, side, breaker).map(|m| (Strategy::AvoidCenter, m))
}

/// Convenience wrapper returning just the move.
pub fn calculate_move<B>(board: &Board, breaker: &mut B, sink: &dyn TraceSink) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    decide(board, breaker, sink).map(|decision| decision.action)
}
