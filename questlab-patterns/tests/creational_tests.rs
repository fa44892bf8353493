use pretty_assertions::assert_eq;
use questlab_patterns::factory::{EnemyFactory, EnemyKind, EnemyRegistry, close_names};
use questlab_patterns::singleton::{Difficulty, GameSettings, Settings, same_instance};
use questlab_patterns::{Creature, Monster, PatternError};

// ── Singleton ────────────────────────────────────────────────────

// The only test that mutates the global instance.
#[test]
fn global_settings_are_shared() {
    let first = GameSettings::global();
    let second = GameSettings::global();
    assert!(same_instance(first, second));

    first.set_volume(150);
    assert_eq!(second.volume(), 100);
    first.set_difficulty(Difficulty::Hard);
    assert_eq!(second.snapshot().difficulty, Difficulty::Hard);
}

#[test]
fn explicit_settings_are_plain_values() {
    let easy = Settings {
        difficulty: Difficulty::Easy,
        ..Settings::default()
    };
    assert_eq!(easy.scaled_enemy_health(100), 75);
    assert_eq!(Settings::default().scaled_enemy_health(100), 100);
    assert_eq!(Difficulty::Hard.to_string(), "hard");
}

// ── Factory ──────────────────────────────────────────────────────

#[test]
fn factory_builds_by_kind() {
    let mut factory = EnemyFactory::default();
    let goblin = factory.create(EnemyKind::Goblin);
    let orc = factory.create(EnemyKind::Orc);
    assert_eq!(goblin.name(), "Goblin #1");
    assert_eq!(orc.name(), "Orc #2");
    assert_eq!(goblin.health().max(), 30);
    assert_eq!(factory.spawned(), 2);
}

#[test]
fn factory_scales_with_settings() {
    let hard = Settings {
        difficulty: Difficulty::Hard,
        ..Settings::default()
    };
    let mut factory = EnemyFactory::new(hard);
    assert_eq!(factory.create(EnemyKind::Goblin).health().max(), 45);
}

#[test]
fn factory_builds_by_name() {
    let mut factory = EnemyFactory::default();
    let dragon = factory.create_named(" Dragon ").unwrap();
    assert!(dragon.describe().starts_with("BOSS Ignis the dragon"));
    assert_eq!(factory.wave(EnemyKind::Skeleton, 3).len(), 3);
}

#[test]
fn unknown_name_suggests_close_matches() {
    let mut factory = EnemyFactory::default();
    let err = factory.create_named("gobln").err().unwrap();
    assert_eq!(err.to_string(), r#"unknown enemy "gobln", did you mean goblin?"#);

    let err = factory.create_named("xyz").err().unwrap();
    assert_eq!(
        err,
        PatternError::UnknownEnemy {
            name: "xyz".into(),
            suggestions: vec![]
        }
    );
    assert_eq!(factory.spawned(), 0);
}

#[test]
fn registry_accepts_runtime_recipes() {
    let mut registry = EnemyRegistry::with_builtins();
    assert_eq!(registry.names(), vec!["dragon", "goblin", "orc", "skeleton"]);

    registry.register("Slime", || {
        Box::new(Monster::new("Blob", "slime", 12, 2)) as Box<dyn Creature>
    });
    let slime = registry.create("SLIME").unwrap();
    assert_eq!(slime.describe(), "Blob the slime (12/12 HP)");

    match registry.create("sk") {
        Err(PatternError::UnknownEnemy { suggestions, .. }) => {
            assert_eq!(suggestions, vec!["skeleton"]);
        }
        other => panic!("expected UnknownEnemy, got {:?}", other.map(|c| c.describe())),
    }
}

#[test]
fn close_names_matches_substrings_and_prefixes() {
    let known = ["counter", "calculator", "canvas", "table"];
    assert_eq!(close_names("tab", known), vec!["table"]);
    assert_eq!(close_names("ca", known), vec!["calculator", "canvas"]);
    assert!(close_names("", known).is_empty());
    assert!(close_names("zzz", known).is_empty());
}
