//! Strictly Heuristics - command-line driver
//!
//! Plays the engine against itself or suggests a single move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_heuristics::{Board, Engine, EngineConfig, GameStatus, Move, MoveRequest, status};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            computer_starts,
            setup,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => EngineConfig::default(),
            };
            if let Some(seed) = seed {
                engine_config = engine_config.with_seed(seed);
            }
            if computer_starts {
                engine_config = engine_config.with_computer_starts(true);
            }
            if !setup.is_empty() {
                engine_config = engine_config.with_setup(setup);
            }
            run_play(&engine_config)
        }
        Command::Suggest { board, seed } => run_suggest(&board, seed),
    }
}

/// Self-play from the configured starting position.
#[instrument(skip_all)]
fn run_play(config: &EngineConfig) -> Result<()> {
    let mut engine = Engine::from_config(config);

    let setup = config
        .setup()
        .iter()
        .cloned()
        .map(Move::try_from)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid setup move")?;

    let board = engine.new_board(*config.computer_starts());
    let mut board = engine.set_hypothetical_moves(&board, setup);
    println!("{}", engine.draw(&board));

    while let Some(next) = engine.advance(&board)? {
        board = next;
        println!("{}", engine.draw(&board));
    }

    match status(&board)? {
        GameStatus::Won(winner) => {
            info!(side = %winner.side, line = %winner.line.name, "Game won");
            println!("winner: {} on {}", winner.side, winner.line.name);
        }
        GameStatus::Tie => println!("tie"),
        GameStatus::InProgress => println!("no move available"),
    }
    Ok(())
}

/// Prints one suggested move.
#[instrument(skip_all)]
fn run_suggest(board: &Board, seed: Option<u64>) -> Result<()> {
    let config = match seed {
        Some(seed) => EngineConfig::default().with_seed(seed),
        None => EngineConfig::default(),
    };
    let mut engine = Engine::from_config(&config);

    print!("{}", engine.draw(board));
    match engine.decide(board) {
        Some(decision) => {
            let request = MoveRequest::from(decision.action);
            println!(
                "{}: {}",
                decision.strategy,
                serde_json::to_string(&request).context("rendering move")?
            );
        }
        None => println!("no move: the game is over"),
    }
    Ok(())
}
