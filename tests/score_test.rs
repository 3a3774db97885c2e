use std::fs;

use anyhow::Result;
use gridsnake::error::Error;
use gridsnake::score::{FileStore, MemoryStore, ScoreStore, Scoreboard};

#[test]
fn lower_score_keeps_the_best() -> Result<()> {
    let mut board = Scoreboard::load(Box::new(MemoryStore::new(Some(10))));
    assert_eq!(board.best(), 10);

    for score in 0..=7 {
        assert!(!board.record(score));
    }
    assert_eq!(board.best(), 10);
    assert_eq!(board.store().load()?, Some(10));
    Ok(())
}

#[test]
fn higher_score_replaces_the_best() -> Result<()> {
    let mut board = Scoreboard::load(Box::new(MemoryStore::new(Some(10))));

    for score in 0..=12 {
        board.record(score);
    }
    assert_eq!(board.best(), 12);
    assert_eq!(board.store().load()?, Some(12));
    Ok(())
}

#[test]
fn equal_score_is_not_a_new_best() {
    let mut board = Scoreboard::load(Box::new(MemoryStore::new(Some(4))));
    assert!(!board.record(4));
    assert!(board.record(5));
}

#[test]
fn empty_slot_reads_as_zero() {
    let board = Scoreboard::load(Box::new(MemoryStore::default()));
    assert_eq!(board.best(), 0);
}

#[test]
fn file_store_survives_a_restart() -> Result<()> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("best.json");

    let store = FileStore::new(&path);
    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.load()?, None);

    let mut board = Scoreboard::load(Box::new(store));
    assert_eq!(board.best(), 0);
    assert!(board.record(3));

    let reloaded = Scoreboard::load(Box::new(FileStore::new(&path)));
    assert_eq!(reloaded.best(), 3);
    assert_eq!(fs::read_to_string(&path)?, r#"{"best":3}"#);
    Ok(())
}

#[test]
fn malformed_file_is_reported_and_treated_as_zero() -> Result<()> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("best.json");
    fs::write(&path, "not json")?;

    let store = FileStore::new(&path);
    assert!(matches!(store.load(), Err(Error::ScoreFormat { .. })));

    let mut board = Scoreboard::load(Box::new(store));
    assert_eq!(board.best(), 0);
    assert!(board.record(1));
    assert_eq!(FileStore::new(&path).load()?, Some(1));
    Ok(())
}

#[test]
fn unwritable_slot_keeps_the_best_in_memory() -> Result<()> {
    let tmp_dir = tempfile::tempdir()?;
    // A directory cannot be opened as a file for writing.
    let mut board = Scoreboard::load(Box::new(FileStore::new(tmp_dir.path())));
    assert!(board.record(6));
    assert_eq!(board.best(), 6);
    Ok(())
}
