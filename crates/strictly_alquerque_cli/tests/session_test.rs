//! End-to-end tests for the terminal session.

use std::io::Cursor;
use strictly_alquerque::{Board, GameEngine, Player};
use strictly_alquerque_cli::{Format, Session, Settings};

fn run_text(engine: GameEngine, script: &str) -> (GameEngine, String) {
    let mut session = Session::with_engine(
        engine,
        Settings::default(),
        Format::Text,
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    session.run().unwrap();
    let engine = session.engine().clone();
    let output = String::from_utf8(session.into_output()).unwrap();
    (engine, output)
}

fn run_json(script: &str) -> Vec<serde_json::Value> {
    let mut session = Session::new(
        Settings::default(),
        Format::Json,
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_text_move_and_history() {
    let (engine, output) = run_text(GameEngine::new(), "2 1\n2,2\nhistory\nq\n");

    assert_eq!(engine.active_player(), Player::Blue);
    assert_eq!(engine.history().len(), 1);
    assert!(output.contains("Red to move"));
    assert!(output.contains("(2, 1) can reach: (2, 2)"));
    assert!(output.contains("Blue's turn."));
    assert!(output.contains("Blue to move, capture required"));
    assert!(output.contains("1. Red (2, 1) -> (2, 2)"));
}

#[test]
fn test_text_reports_ignored_clicks_and_bad_input() {
    let (engine, output) = run_text(GameEngine::new(), "0 0\nfly\n9 9\n");

    assert_eq!(engine.phase(), strictly_alquerque::Phase::NoSelection);
    assert!(output.contains("Nothing to do at (0, 0)."));
    assert!(output.contains("Unrecognised input \"fly\""));
    assert!(output.contains("outside the 5x5 board"));
}

#[test]
fn test_text_game_over_and_restart() {
    let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....."]).unwrap();
    let engine = GameEngine::from_board(board, Player::Red);
    let (engine, output) = run_text(engine, "0 0\n22\n");

    assert!(output.contains("Congratulations, Red wins!"));
    assert!(output.contains("Red wins: Blue has no pieces left"));
    assert!(engine.is_game_over());

    let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....."]).unwrap();
    let engine = GameEngine::from_board(board, Player::Red);
    let (engine, _) = run_text(engine, "0 0\n22\n2 1\n");
    assert!(!engine.is_game_over());
    assert_eq!(engine.board().count(Player::Red), 12);
    assert_eq!(engine.board().count(Player::Blue), 12);
    assert!(engine.history().is_empty());
    assert_eq!(engine.selection().map(|c| (c.row(), c.col())), Some((2, 1)));
}

#[test]
fn test_text_moves_listing() {
    let (_, output) = run_text(GameEngine::new(), "moves\n");
    assert!(output.contains("SE Red (1, 1) -> (2, 2)"));
    assert!(output.contains("E Red (2, 1) -> (2, 2)"));
}

#[test]
fn test_json_frames() {
    let frames = run_json("2 1\n2 2\nnonsense\n");
    assert_eq!(frames.len(), 4);

    assert_eq!(frames[0]["events"], serde_json::json!([]));
    assert_eq!(frames[0]["snapshot"]["active_player"], "Red");

    assert_eq!(frames[1]["events"], serde_json::json!(["BoardChanged"]));
    assert_eq!(frames[1]["snapshot"]["selected"], serde_json::json!([2, 1]));

    assert_eq!(
        frames[2]["events"],
        serde_json::json!(["BoardChanged", "TurnEnded", {"PlayerSwitched": "Blue"}])
    );
    assert_eq!(frames[2]["snapshot"]["mode"], "Eating");

    assert!(frames[3]["error"].is_string());
}

#[test]
fn test_show_prints_starting_board() {
    let mut session = Session::new(
        Settings::default(),
        Format::Text,
        Cursor::new(String::new()),
        Vec::new(),
    );
    session.show().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("R-R-R-R-R"));
    assert!(output.contains("R-R-.-B-B"));
    assert!(output.contains("Selectable: (1, 1) (1, 2) (1, 3) (2, 1)"));
}
