//! Heuristic move selection.
//!
//! Primitives answer one narrow question each (can I win here, where is
//! a fork, what does the opening book say). The pipeline asks them in a
//! fixed order and plays the first answer.

mod confidence;
mod opening;
mod pipeline;
mod primitives;

pub use confidence::{Confidence, has_confidence, move_to_confidence, move_two_steps_confidence};
pub use opening::move_second_step;
pub use pipeline::{Decision, Strategy, calculate_move, decide};
pub use primitives::{
    all_two_empty_cell_pairs, move_avoid_center, move_to_block, move_to_corner, move_to_win,
    moves_to_win,
};
