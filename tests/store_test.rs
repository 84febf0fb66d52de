//! Tests for the JSON key/value store.

use tictactoe_tui::{
    Board, GameHistory, JsonFileStore, MemoryStore, Player, Position, Square, StateStore,
    HISTORY_KEY, STEP_KEY,
};

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    store.set(STEP_KEY, &3usize).unwrap();
    assert_eq!(store.get(STEP_KEY, 0usize), 3);
}

#[test]
fn test_missing_key_yields_default() {
    let store = MemoryStore::new();
    assert_eq!(store.get(STEP_KEY, 7usize), 7);
    assert_eq!(store.get(HISTORY_KEY, vec![Board::new()]), vec![Board::new()]);
}

#[test]
fn test_wrong_type_yields_default() {
    let mut store = MemoryStore::new();
    store.set(STEP_KEY, "not a number").unwrap();
    assert_eq!(store.get(STEP_KEY, 0usize), 0);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
    let history = vec![Board::new(), board];

    {
        let mut store = JsonFileStore::open(&path);
        store.set(STEP_KEY, &1usize).unwrap();
        store.set(HISTORY_KEY, &history).unwrap();
    }

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(STEP_KEY, 0usize), 1);
    assert_eq!(store.get(HISTORY_KEY, Vec::<Board>::new()), history);
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("state.json");

    let mut store = JsonFileStore::open(&path);
    store.set(STEP_KEY, &0usize).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(STEP_KEY, 0usize), 0);
    assert_eq!(store.get(HISTORY_KEY, vec![Board::new()]), vec![Board::new()]);
}

#[test]
fn test_non_object_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(STEP_KEY, 42usize), 42);
}

#[test]
fn test_persisted_game_reconstitutes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut game = GameHistory::new();
    game.select_square(Position::TopLeft);
    game.select_square(Position::Center);
    game.jump_to(1);

    {
        let mut store = JsonFileStore::open(&path);
        store.set(STEP_KEY, &game.step()).unwrap();
        store.set(HISTORY_KEY, game.boards()).unwrap();
    }

    let store = JsonFileStore::open(&path);
    let boards = store.get(HISTORY_KEY, vec![Board::new()]);
    let step = store.get(STEP_KEY, 0usize);
    let restored = GameHistory::from_parts(boards, step);

    assert_eq!(restored, game);
    assert_eq!(restored.step(), 1);
    assert_eq!(restored.boards().len(), 3);
}

#[test]
fn test_inconsistent_pair_resets() {
    // Step persisted, history lost: the reconstituted game starts fresh.
    let boards = vec![Board::new()];
    let restored = GameHistory::from_parts(boards, 5);
    assert_eq!(restored, GameHistory::new());
}
