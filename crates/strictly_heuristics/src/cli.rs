//! Command-line interface for strictly_heuristics.

use clap::{Parser, Subcommand};
use strictly_heuristics::{Board, MoveRequest};

/// Strictly Heuristics - rule-based tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_heuristics")]
#[command(about = "Heuristic tic-tac-toe decision engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play both sides until the game ends
    Play {
        /// Path to engine configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for tie-breaking (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Let the engine place the opening mark (overrides config)
        #[arg(long)]
        computer_starts: bool,

        /// Moves applied without checks before play, as side:row,col
        #[arg(long, num_args = 1.., value_name = "SIDE:ROW,COL")]
        setup: Vec<MoveRequest>,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Board as rows of x, o and '.', separated by '/'
        #[arg(short, long, value_parser = parse_board)]
        board: Board,

        /// Seed for tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_board(s: &str) -> Result<Board, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_arguments() {
        let cli = Cli::try_parse_from([
            "strictly_heuristics",
            "play",
            "--seed",
            "9",
            "--setup",
            "x:2,0",
            "x:1,1",
            "o:0,2",
        ])
        .unwrap();

        match cli.command {
            Command::Play {
                seed,
                setup,
                computer_starts,
                config,
            } => {
                assert_eq!(seed, Some(9));
                assert_eq!(setup.len(), 3);
                assert_eq!(setup[2], MoveRequest::new("o", 0, 2));
                assert!(!computer_starts);
                assert!(config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_suggest_rejects_bad_board() {
        assert!(Cli::try_parse_from(["strictly_heuristics", "suggest", "--board", "xx"]).is_err());
    }
}
