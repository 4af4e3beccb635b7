//! The engine: the public face of board rules and move selection.

use crate::engine_config::EngineConfig;
use crate::games::tictactoe::rules::{self, GameStatus, Winner};
use crate::games::tictactoe::strategy::{self, Decision};
use crate::games::tictactoe::{
    self as ttt, Board, EngineError, IllegalMove, InvalidState, Move, MoveRequest,
};
use crate::tie_break::{RandomTieBreaker, TieBreaker};
use crate::trace::{NoopSink, TraceSink, TracingSink};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tic-tac-toe decision engine.
///
/// Holds the two pieces of state the rules need from outside: where the
/// decision trace goes and how ties between equally good moves are broken.
/// Boards themselves are plain values passed in and returned.
pub struct Engine<B: TieBreaker = RandomTieBreaker> {
    breaker: B,
    sink: Arc<dyn TraceSink>,
}

impl<B: TieBreaker> std::fmt::Debug for Engine<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("breaker", &std::any::type_name::<B>())
            .finish_non_exhaustive()
    }
}

impl Engine<RandomTieBreaker> {
    /// Engine with OS-seeded tie-breaking and no trace output.
    pub fn new() -> Self {
        Self::with_tie_breaker(RandomTieBreaker::new())
    }

    /// Engine whose choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_tie_breaker(RandomTieBreaker::seeded(seed))
    }

    /// Engine set up from a configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = match config.seed() {
            Some(seed) => Self::seeded(*seed),
            None => Self::new(),
        };
        if *config.trace() {
            engine.set_logger(TracingSink);
        }
        debug!(seed = ?config.seed(), trace = config.trace(), "Engine configured");
        engine
    }
}

impl Default for Engine<RandomTieBreaker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TieBreaker> Engine<B> {
    /// Engine with a caller-supplied tie-breaker and no trace output.
    pub fn with_tie_breaker(breaker: B) -> Self {
        Self {
            breaker,
            sink: Arc::new(NoopSink),
        }
    }

    /// Installs the handler receiving one line per strategy decision.
    pub fn set_logger(&mut self, sink: impl TraceSink + 'static) {
        self.sink = Arc::new(sink);
    }

    /// Builder form of [`Engine::set_logger`].
    pub fn with_logger(mut self, sink: impl TraceSink + 'static) -> Self {
        self.set_logger(sink);
        self
    }

    /// An empty board, optionally with the engine's opening move on it.
    #[instrument(skip(self))]
    pub fn new_board(&mut self, start_with_computed_first_move: bool) -> Board {
        let board = Board::empty();
        if !start_with_computed_first_move {
            return board;
        }
        match self.calculate_move(&board) {
            Some(opening) => board.apply_move(opening),
            None => board,
        }
    }

    /// The textual grid.
    pub fn draw(&self, board: &Board) -> String {
        board.render()
    }

    /// Validated commit of a move.
    pub fn set_move(&self, board: &Board, request: &MoveRequest) -> Result<Board, IllegalMove> {
        ttt::set_move(board, request)
    }

    /// Applies moves left to right without legality checks.
    pub fn set_hypothetical_moves<I>(&self, board: &Board, moves: I) -> Board
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .fold(*board, |acc, action| acc.apply_move(action))
    }

    /// The single winner, if any; errors on two or more winning lines.
    pub fn get_winner(&self, board: &Board) -> Result<Option<Winner>, InvalidState> {
        rules::winner(board)
    }

    /// True when the board is full.
    pub fn is_tie(&self, board: &Board) -> bool {
        rules::is_tie(board)
    }

    /// Every legal move for the side to move.
    pub fn get_possible_moves(&self, board: &Board) -> Vec<Move> {
        rules::possible_moves(board)
    }

    /// The engine's move for the side to move.
    pub fn calculate_move(&mut self, board: &Board) -> Option<Move> {
        strategy::calculate_move(board, &mut self.breaker, self.sink.as_ref())
    }

    /// The engine's move together with the strategy that chose it.
    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        strategy::decide(board, &mut self.breaker, self.sink.as_ref())
    }

    /// Plays one engine move through the legality gate.
    ///
    /// Returns `None` once the game is won or tied.
    #[instrument(skip_all)]
    pub fn advance(&mut self, board: &Board) -> Result<Option<Board>, EngineError> {
        if !matches!(rules::status(board)?, GameStatus::InProgress) {
            return Ok(None);
        }
        let Some(action) = self.calculate_move(board) else {
            return Ok(None);
        };
        let next = self.set_move(board, &action.to_request())?;
        debug!(%action, "Engine move committed");
        Ok(Some(next))
    }

    /// Lets the engine play both sides until the game ends.
    #[instrument(skip_all)]
    pub fn play_out(&mut self, board: &Board) -> Result<Board, EngineError> {
        let mut current = *board;
        while let Some(next) = self.advance(&current)? {
            current = next;
        }
        info!(status = ?rules::status(&current)?, "Game finished");
        Ok(current)
    }
}
