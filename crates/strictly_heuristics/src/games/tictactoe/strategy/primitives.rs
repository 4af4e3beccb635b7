//! Single-move heuristics: win, block, corners, center avoidance.
//!
//! Every candidate is evaluated on a hypothetical board built with
//! [`Board::apply_move`]; the board passed in is never changed.

use super::super::rules::is_won_by;
use super::super::{Board, Move, Position, Side};
use crate::tie_break::{TieBreaker, pick_one};
use tracing::instrument;

/// Empty squares where `side` would complete a line right away.
#[instrument(skip(board))]
pub fn moves_to_win(board: &Board, side: Side) -> Vec<Move> {
    candidate_moves(board, side)
        .filter(|mov| is_won_by(&board.apply_move(*mov), side))
        .collect()
}

/// One winning move for `side`, chosen by the tie-breaker.
pub fn move_to_win<B>(board: &Board, side: Side, breaker: &mut B) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    pick_one(breaker, &moves_to_win(board, side))
}

/// The opponent's winning square, claimed by `side`.
pub fn move_to_block<B>(board: &Board, side: Side, breaker: &mut B) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    move_to_win(board, side.opponent(), breaker).map(|mov| mov.relabel(side))
}

/// Every unordered pair of distinct empty squares.
#[instrument(skip(board))]
pub fn all_two_empty_cell_pairs(board: &Board) -> Vec<(Position, Position)> {
    let empties: Vec<Position> = board.empty_cells().iter().map(|c| c.position).collect();
    empties
        .iter()
        .enumerate()
        .flat_map(|(i, &first)| empties[i + 1..].iter().map(move |&second| (first, second)))
        .collect()
}

/// A free corner, preferring corners after which `side` has a winning move.
pub fn move_to_corner<B>(board: &Board, side: Side, breaker: &mut B) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    let corners: Vec<Move> = candidate_moves(board, side)
        .filter(|mov| mov.position.is_corner())
        .collect();

    let setting_up_win: Vec<Move> = corners
        .iter()
        .copied()
        .filter(|mov| !moves_to_win(&board.apply_move(*mov), side).is_empty())
        .collect();

    if setting_up_win.is_empty() {
        pick_one(breaker, &corners)
    } else {
        pick_one(breaker, &setting_up_win)
    }
}

/// Any free square other than the center; the center only when it is the
/// last free square.
pub fn move_avoid_center<B>(board: &Board, side: Side, breaker: &mut B) -> Option<Move>
where
    B: TieBreaker + ?Sized,
{
    let (center, elsewhere): (Vec<Move>, Vec<Move>) =
        candidate_moves(board, side).partition(|mov| mov.position.is_center());

    pick_one(breaker, &elsewhere).or_else(|| center.first().copied())
}

/// Every empty square labelled with `side`.
pub(super) fn candidate_moves(board: &Board, side: Side) -> impl Iterator<Item = Move> + '_ {
    board
        .empty_cells()
        .into_iter()
        .map(move |cell| Move::new(side, cell.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tie_break::{FirstCandidate, RandomTieBreaker};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_moves_to_win_finds_both_cells() {
        // x threatens row 0 at (0,2) and column 0 at (2,0)
        let b = board("xx./xo./..o");
        let wins = moves_to_win(&b, Side::X);
        assert_eq!(
            wins,
            vec![
                Move::new(Side::X, Position::TopRight),
                Move::new(Side::X, Position::BottomLeft)
            ]
        );
    }

    #[test]
    fn test_moves_to_win_leaves_board_untouched() {
        let b = board("xx./oo./...");
        let before = b;
        let _ = moves_to_win(&b, Side::X);
        let _ = moves_to_win(&b, Side::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_double_line_completion_counts_as_win() {
        // (0,2) completes row 0 and column 2 at once
        let b = board("xx./oox/oox");
        assert_eq!(
            moves_to_win(&b, Side::X),
            vec![Move::new(Side::X, Position::TopRight)]
        );
    }

    #[test]
    fn test_no_win_available() {
        assert_eq!(move_to_win(&Board::empty(), Side::X, &mut FirstCandidate), None);
    }

    #[test]
    fn test_block_relabels_opponent_win() {
        let b = board("oo./.x./..x");
        assert_eq!(
            move_to_block(&b, Side::X, &mut FirstCandidate),
            Some(Move::new(Side::X, Position::TopRight))
        );
        assert_eq!(move_to_block(&Board::empty(), Side::X, &mut FirstCandidate), None);
    }

    #[test]
    fn test_pairs_count() {
        assert_eq!(all_two_empty_cell_pairs(&Board::empty()).len(), 36);
        let b = board("xo./.../...");
        let pairs = all_two_empty_cell_pairs(&b);
        assert_eq!(pairs.len(), 21);
        assert!(pairs.iter().all(|(a, c)| a < c));
        assert!(
            !pairs
                .iter()
                .any(|(a, c)| *a == Position::TopLeft || *c == Position::TopLeft)
        );
    }

    #[test]
    fn test_corner_on_empty_board() {
        let mut breaker = RandomTieBreaker::seeded(3);
        for _ in 0..20 {
            let mov = move_to_corner(&Board::empty(), Side::X, &mut breaker).unwrap();
            assert!(mov.position.is_corner());
            assert_eq!(mov.side, Side::X);
        }
    }

    #[test]
    fn test_corner_prefers_setting_up_a_win() {
        // x at (0,1): only (0,0) and (0,2) set up a row-0 threat;
        // (2,0) and (2,2) do not
        let b = board(".x./.o./...");
        let mut breaker = RandomTieBreaker::seeded(11);
        for _ in 0..20 {
            let mov = move_to_corner(&b, Side::X, &mut breaker).unwrap();
            assert!(matches!(mov.position, Position::TopLeft | Position::TopRight));
        }
    }

    #[test]
    fn test_no_free_corner() {
        let b = board("x.o/...  /o.x");
        assert_eq!(move_to_corner(&b, Side::X, &mut FirstCandidate), None);
    }

    #[test]
    fn test_avoid_center() {
        let b = board("xo./...  /...");
        let mov = move_avoid_center(&b, Side::X, &mut FirstCandidate).unwrap();
        assert_eq!(mov.position, Position::TopRight);

        let only_center = board("xox/o.x/oxo");
        assert_eq!(
            move_avoid_center(&only_center, Side::O, &mut FirstCandidate),
            Some(Move::new(Side::O, Position::Center))
        );

        let full = board("xox/oxx/oxo");
        assert_eq!(move_avoid_center(&full, Side::O, &mut FirstCandidate), None);
    }
}
