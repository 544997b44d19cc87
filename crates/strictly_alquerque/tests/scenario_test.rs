//! Multi-turn scenarios: capture sequences, presenters and snapshots.

use strictly_alquerque::{
    Board, Cell, CellState, Direction, Event, GameEngine, Mode, Phase, Player, Presenter,
    Snapshot, TransitionKind, dispatch,
};

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).expect("cell on board")
}

/// Red can capture with either corner piece; the (0,0) piece chains twice.
fn chain_board() -> Board {
    Board::from_rows(["R..BR", ".B...", ".....", "...B.", "B...."]).unwrap()
}

#[test]
fn test_both_capturers_are_selectable() {
    let engine = GameEngine::from_board(chain_board(), Player::Red);
    assert_eq!(engine.mode(), Mode::Eating);

    let selectable: Vec<_> = engine.catalogue().cells().collect();
    assert_eq!(selectable, vec![cell(0, 0), cell(0, 4)]);
    assert!(
        engine
            .catalogue()
            .get(cell(0, 0))
            .is_some_and(|dirs| dirs.contains(&Direction::SouthEast))
    );
    assert!(
        engine
            .catalogue()
            .get(cell(0, 4))
            .is_some_and(|dirs| dirs.contains(&Direction::West))
    );
}

#[test]
fn test_switching_allowed_before_first_capture() {
    let mut engine = GameEngine::from_board(chain_board(), Player::Red);
    engine.select_cell(cell(0, 0));
    assert!(engine.is_marked(Cell::CENTER));

    assert_eq!(engine.select_cell(cell(0, 4)), vec![Event::BoardChanged]);
    assert_eq!(engine.selection(), Some(cell(0, 4)));
    assert!(engine.is_marked(cell(0, 2)));
    assert!(!engine.is_marked(Cell::CENTER));
}

#[test]
fn test_capture_sequence_locks_piece() {
    let mut engine = GameEngine::from_board(chain_board(), Player::Red);
    engine.select_cell(cell(0, 0));

    // First jump lands on the center with another jump available
    let events = engine.select_cell(Cell::CENTER);
    assert_eq!(events, vec![Event::BoardChanged]);
    assert_eq!(engine.active_player(), Player::Red);
    assert!(engine.in_sequence());
    assert_eq!(
        engine.phase(),
        Phase::Selected {
            cell: Cell::CENTER,
            sequence: true
        }
    );
    assert!(engine.cell_state(cell(1, 1)).is_empty());
    assert_eq!(engine.board().count(Player::Blue), 3);

    // Only the landing piece and its next landing hole are offered
    let selectable: Vec<_> = engine.catalogue().cells().collect();
    assert_eq!(selectable, vec![Cell::CENTER]);
    let mut marked = engine.board().marked_cells();
    marked.sort();
    assert_eq!(marked, vec![Cell::CENTER, cell(4, 4)]);

    // The other capturer may no longer be picked up
    assert!(engine.select_cell(cell(0, 4)).is_empty());
    assert!(engine.select_cell(Cell::CENTER).is_empty());
    assert!(engine.select_cell(cell(0, 0)).is_empty());
    assert_eq!(engine.selection(), Some(Cell::CENTER));

    let events = engine.select_cell(cell(4, 4));
    assert_eq!(
        events,
        vec![
            Event::BoardChanged,
            Event::TurnEnded,
            Event::PlayerSwitched(Player::Blue),
        ]
    );
    assert_eq!(engine.cell_state(cell(4, 4)), CellState::Occupied(Player::Red));
    assert_eq!(engine.board().count(Player::Blue), 2);
    assert_eq!(engine.mode(), Mode::Moving);

    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|t| t.kind() == TransitionKind::Capture));
    assert_eq!(history[0].captured(), Some(cell(1, 1)));
    assert_eq!(history[1].captured(), Some(cell(3, 3)));
}

#[test]
fn test_status_line_tracks_turn() {
    let mut engine = GameEngine::from_board(chain_board(), Player::Red);
    assert_eq!(engine.status_line(), "Red to move, capture required");

    engine.select_cell(cell(0, 0));
    engine.select_cell(Cell::CENTER);
    assert_eq!(engine.status_line(), "Red to move, continue capturing");

    engine.select_cell(cell(4, 4));
    assert_eq!(engine.status_line(), "Blue to move");
}

#[test]
fn test_last_capture_wins() {
    let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....."]).unwrap();
    let mut engine = GameEngine::from_board(board, Player::Red);
    engine.select_cell(cell(0, 0));
    let events = engine.select_cell(Cell::CENTER);
    assert_eq!(
        events,
        vec![
            Event::BoardChanged,
            Event::TurnEnded,
            Event::PlayerSwitched(Player::Blue),
            Event::GameOver(Player::Red),
        ]
    );
    assert_eq!(engine.status_line(), "Red wins: Blue has no pieces left");
    assert!(engine.board().marked_cells().is_empty());
}

#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl Presenter for Transcript {
    fn board_changed(&mut self) {
        self.lines.push("redraw".to_string());
    }

    fn player_switched(&mut self, player: Player) {
        self.lines.push(format!("{player} to move"));
    }

    fn game_over(&mut self, winner: Player) {
        self.lines.push(format!("{winner} wins"));
    }
}

#[test]
fn test_presenter_sees_events_in_order() {
    let board = Board::from_rows(["R....", ".B...", ".....", ".....", "....."]).unwrap();
    let mut engine = GameEngine::from_board(board, Player::Red);
    let mut transcript = Transcript::default();

    dispatch(&engine.select_cell(cell(0, 0)), &mut transcript);
    dispatch(&engine.select_cell(Cell::CENTER), &mut transcript);

    assert_eq!(
        transcript.lines,
        vec!["redraw", "redraw", "Blue to move", "Red wins"]
    );
}

#[test]
fn test_snapshot_serializes_for_front_ends() {
    let mut engine = GameEngine::new();
    engine.select_cell(cell(2, 1));
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.rows().len(), 5);
    assert_eq!(*snapshot.selected(), Some(cell(2, 1)));
    assert!(snapshot.marked().contains(&Cell::CENTER));
    assert!(!snapshot.is_over());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["active_player"], "Red");
    assert_eq!(json["mode"], "Moving");
    assert_eq!(json["rows"][2][2], "Empty");
    assert_eq!(json["rows"][0][0]["Occupied"], "Red");
    assert_eq!(json["selected"], serde_json::json!([2, 1]));

    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_snapshot_rejects_off_board_cells() {
    let mut json = serde_json::to_value(GameEngine::new().snapshot()).unwrap();
    json["selected"] = serde_json::json!([7, 1]);
    assert!(serde_json::from_value::<Snapshot>(json).is_err());
}
