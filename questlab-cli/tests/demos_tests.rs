use pretty_assertions::assert_eq;
use questlab_cli::demos::{self, DemoContext, Topic};
use questlab_cli::QuestlabConfig;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> QuestlabConfig {
    QuestlabConfig {
        save_dir: dir.path().join("saves"),
        seed: Some(7),
        ..QuestlabConfig::default()
    }
}

fn run_demo(name: &str, config: &QuestlabConfig) -> String {
    let demo = demos::find(name).unwrap();
    let mut out = Vec::new();
    let mut ctx = DemoContext::new(&mut out, config);
    demos::run(demo, &mut ctx).unwrap();
    drop(ctx);
    String::from_utf8(out).unwrap()
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = demos::all().iter().map(|d| d.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn every_topic_has_demos() {
    for topic in [Topic::Model, Topic::Basics, Topic::Patterns, Topic::Ui] {
        assert!(demos::by_topic(topic).count() >= 4, "{topic} is thin");
    }
}

#[test]
fn find_ignores_case() {
    assert_eq!(demos::find("Calculator").unwrap().name, "calculator");
}

#[test]
fn unknown_demo_suggests_close_names() {
    let err = demos::find("calc").unwrap_err().to_string();
    assert_eq!(
        err,
        "unknown demo \"calc\"; did you mean calculator or canvas?"
    );

    let err = demos::find("zzz").unwrap_err().to_string();
    assert!(err.contains("questlab list"), "{err}");
}

// ── Running ──────────────────────────────────────────────────────

#[test]
fn every_demo_runs() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    for demo in demos::all() {
        let mut out = Vec::new();
        let mut ctx = DemoContext::new(&mut out, &config);
        demos::run(demo, &mut ctx).unwrap_or_else(|e| panic!("{}: {e:#}", demo.name));
        drop(ctx);
        let text = String::from_utf8(out).unwrap();
        assert!(
            text.starts_with(&format!("== {} ({}) ==\n", demo.name, demo.topic)),
            "{text}"
        );
        assert!(text.lines().count() > 2, "{} printed almost nothing", demo.name);
    }
}

#[test]
fn calculator_demo_reports_division_by_zero() {
    let dir = TempDir::new().unwrap();
    let text = run_demo("calculator", &config_in(&dir));
    assert!(text.contains("[error] Calculator: cannot divide by zero"), "{text}");
    assert!(text.contains("Still showing: 10 ÷ 0"), "{text}");
}

#[test]
fn quests_demo_pays_the_reward_once() {
    let dir = TempDir::new().unwrap();
    let text = run_demo("quests", &config_in(&dir));
    assert_eq!(text.matches("done, +15 gold").count(), 1, "{text}");
    assert!(text.contains("Gold earned: 15"), "{text}");
}

#[test]
fn seeded_demos_repeat() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    assert_eq!(run_demo("iterators", &config), run_demo("iterators", &config));
}

#[test]
fn inventory_demo_respects_capacity() {
    let dir = TempDir::new().unwrap();
    let config = QuestlabConfig {
        inventory_capacity: 2,
        ..config_in(&dir)
    };
    let text = run_demo("inventory", &config);
    assert!(text.contains("A bag with 2 slots"), "{text}");
    assert!(text.contains("no room for Healing Draught"), "{text}");
}

#[test]
fn file_demos_write_into_the_save_dir() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    run_demo("filesystem", &config);
    run_demo("save", &config);
    assert!(config.save_dir.join("slot-1.sav").is_file());
    assert!(config.save_dir.join("game.json").is_file());
    assert!(config.log_path().is_file());
}

#[test]
fn progress_demo_completes_then_cancels() {
    let dir = TempDir::new().unwrap();
    let text = run_demo("progress", &config_in(&dir));
    assert!(text.contains("[##########] 100%"), "{text}");
    assert!(text.contains("First worker: completed"), "{text}");
    assert!(text.contains("Second worker: stopped early"), "{text}");
    assert!(text.contains("(cancelled)"), "{text}");
}
