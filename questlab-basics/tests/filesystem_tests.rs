use questlab_basics::filesystem::{
    GameLog, backup, list_save_files, slot_path, write_atomic,
};
use questlab_types::{GameEvent, GameEventKind};
use std::fs;

#[test]
fn log_appends_timestamped_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = GameLog::open(dir.path().join("logs/game.log")).unwrap();

    log.append("Adventure begins").unwrap();
    log.append_event(&GameEvent::now(GameEventKind::QuestAccepted {
        title: "Rat Cellar".into(),
    }))
    .unwrap();
    log.append("two\nlines").unwrap();

    let lines = log.read_lines().unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('['));
    assert_eq!(GameLog::message_of(&lines[1]), "Quest accepted: Rat Cellar");
    assert_eq!(GameLog::message_of(&lines[2]), "two lines");
    assert_eq!(log.tail(1).unwrap().len(), 1);
}

#[test]
fn reopening_log_keeps_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.log");
    GameLog::open(&path).unwrap().append("first").unwrap();
    let log = GameLog::open(&path).unwrap();
    log.append("second").unwrap();
    assert_eq!(log.read_lines().unwrap().len(), 2);
}

#[test]
fn save_listing_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(slot_path(dir.path(), 1), "a = 1").unwrap();
    fs::write(slot_path(dir.path(), 2), "a = 2").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let saves = list_save_files(dir.path(), "sav").unwrap();
    assert_eq!(saves.len(), 2);
    assert!(saves.iter().all(|p| p.extension().unwrap() == "sav"));
}

#[test]
fn missing_directory_has_no_saves() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_save_files(&dir.path().join("absent"), "sav")
        .unwrap()
        .is_empty());
}

#[test]
fn atomic_write_replaces_contents_and_cleans_temp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/slot-1.sav");
    write_atomic(&path, b"gold = 1\n").unwrap();
    write_atomic(&path, b"gold = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "gold = 2\n");
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn backup_copies_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = slot_path(dir.path(), 3);
    assert_eq!(backup(&path).unwrap(), None);

    fs::write(&path, "gold = 9").unwrap();
    let bak = backup(&path).unwrap().unwrap();
    assert!(bak.to_string_lossy().ends_with("slot-3.sav.bak"));
    assert_eq!(fs::read_to_string(bak).unwrap(), "gold = 9");
}
