//! Tests for loading engine configuration from disk.

use std::fs;
use tempfile::TempDir;

use strictly_heuristics::{Engine, EngineConfig, Move, MoveRequest, Side};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("engine.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"seed = 5
computer_starts = true

[[setup]]
side = "x"
row = 1
col = 1
"#,
    );

    let config = EngineConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.seed(), Some(5));
    assert!(*config.computer_starts());
    assert!(*config.trace());
    assert_eq!(config.setup(), &vec![MoveRequest::new("x", 1, 1)]);
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_setup_side_surfaces_on_conversion() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"[[setup]]
side = "z"
row = 0
col = 0
"#,
    );

    let config = EngineConfig::from_file(&path).expect("Raw requests load without checks");
    let converted: Result<Vec<Move>, _> =
        config.setup().iter().cloned().map(Move::try_from).collect();
    assert!(converted.is_err());
}

#[test]
fn test_seeded_config_reproduces_choices() {
    let config = EngineConfig::default().with_seed(17);
    let mut first = Engine::from_config(&config);
    let mut second = Engine::from_config(&config);

    let a = first.new_board(true);
    let b = second.new_board(true);
    assert_eq!(a, b);
    assert_eq!(a.count(Side::X), 1);
}
