mod action;
mod contracts;
mod error;
mod lines;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use action::{Move, MoveRequest};
pub use contracts::{BoardConsistent, LegalMove, set_move, verify_move};
pub use error::{BoardParseError, EngineError, IllegalMove, InvalidState};
pub use lines::{Line, LineName, lines};
pub use position::Position;
pub use rules::{GameStatus, Winner};
pub use types::{Board, Cell, Side, Square};
