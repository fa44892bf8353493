use questlab_basics::errors::{Command, load_or_default, load_with_fallback, parse_command};
use questlab_basics::BasicsError;
use questlab_basics::{InputError, SaveData};
use std::fs;

#[test]
fn parses_commands() {
    assert_eq!(
        parse_command("attack cave troll").unwrap(),
        Command::Attack {
            target: "cave troll".into()
        }
    );
    assert_eq!(parse_command("HEAL 20").unwrap(), Command::Heal { amount: 20 });
    assert_eq!(parse_command("  i ").unwrap(), Command::Inventory);
    assert_eq!(parse_command("quit").unwrap(), Command::Quit);
}

#[test]
fn command_errors_name_the_problem() {
    assert_eq!(
        parse_command("").unwrap_err(),
        InputError::Empty { field: "command" }
    );
    assert_eq!(
        parse_command("dance").unwrap_err().to_string(),
        r#"unknown command "dance""#
    );
    assert_eq!(
        parse_command("heal").unwrap_err().to_string(),
        r#"command "heal" needs an amount"#
    );
    assert!(matches!(
        parse_command("heal lots"),
        Err(InputError::NotANumber { .. })
    ));
}

#[test]
fn load_or_default_handles_missing_and_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing: SaveData = load_or_default(&dir.path().join("absent.json"));
    assert!(missing.is_empty());

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, "{ not json").unwrap();
    let fallback: SaveData = load_or_default(&corrupt);
    assert!(fallback.is_empty());

    let good = dir.path().join("good.json");
    fs::write(&good, r#"{"gold": 5}"#).unwrap();
    let loaded: SaveData = load_or_default(&good);
    assert_eq!(loaded.get_i64("gold"), Some(5));
}

#[test]
fn load_with_fallback_uses_any_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.sav");
    let fresh: u32 = load_with_fallback(&path, |_| Err(BasicsError::DivisionByZero));
    assert_eq!(fresh, 0);
    let loaded: u32 = load_with_fallback(&path, |_| Ok(7));
    assert_eq!(loaded, 7);
}
