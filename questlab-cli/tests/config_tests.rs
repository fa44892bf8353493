use pretty_assertions::assert_eq;
use questlab_cli::QuestlabConfig;
use questlab_patterns::singleton::Difficulty;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("questlab.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = QuestlabConfig::load_from(&dir.path().join("nope.toml"));
    assert_eq!(config, QuestlabConfig::default());
    assert_eq!(config.inventory_capacity, 10);
    assert_eq!(config.starting_health, 100);
    assert!(config.save_dir.ends_with("questlab"));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
            starting_health = 150
            seed = 42
            save_dir = "/tmp/questlab-saves"

            [settings]
            difficulty = "hard"
        "#,
    );
    let config = QuestlabConfig::load_from(&path);
    assert_eq!(config.starting_health, 150);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.save_dir, PathBuf::from("/tmp/questlab-saves"));
    assert_eq!(config.settings.difficulty, Difficulty::Hard);
    assert_eq!(config.settings.volume, 70);
    assert_eq!(config.inventory_capacity, 10);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "starting_health = \"lots\"\n");
    assert_eq!(QuestlabConfig::load_from(&path), QuestlabConfig::default());

    let path = write_config(&dir, "this is not toml [");
    assert_eq!(QuestlabConfig::load_from(&path), QuestlabConfig::default());
}

#[test]
fn log_path_resolves_against_save_dir() {
    let mut config = QuestlabConfig {
        save_dir: PathBuf::from("/srv/questlab"),
        ..QuestlabConfig::default()
    };
    assert_eq!(config.log_path(), PathBuf::from("/srv/questlab/questlab.log"));

    config.log_file = Some(PathBuf::from("logs/game.log"));
    assert_eq!(config.log_path(), PathBuf::from("/srv/questlab/logs/game.log"));

    config.log_file = Some(PathBuf::from("/var/log/game.log"));
    assert_eq!(config.log_path(), PathBuf::from("/var/log/game.log"));
}

#[test]
fn printed_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let config = QuestlabConfig {
        seed: Some(7),
        log_file: Some(PathBuf::from("game.log")),
        ..QuestlabConfig::default()
    };
    let path = write_config(&dir, &config.to_toml().unwrap());
    assert_eq!(QuestlabConfig::load_from(&path), config);
}
