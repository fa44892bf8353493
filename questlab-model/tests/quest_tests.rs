use questlab_model::{ModelError, Quest, QuestLog, QuestProgress, QuestStatus};
use questlab_types::QuestId;

// ── Quest ────────────────────────────────────────────────────────

#[test]
fn new_quest_is_available() {
    let q = Quest::new("Rat Cellar", 5, 50);
    assert_eq!(q.status(), QuestStatus::Available);
    assert_eq!(q.progress(), 0);
}

#[test]
fn zero_target_becomes_one() {
    assert_eq!(Quest::new("Talk to the mayor", 0, 5).target(), 1);
}

#[test]
fn advance_requires_acceptance() {
    let mut q = Quest::new("Rat Cellar", 5, 50);
    assert_eq!(
        q.advance(1),
        QuestProgress::Ignored("quest has not been accepted")
    );
}

#[test]
fn completes_exactly_once() {
    let mut q = Quest::new("Rat Cellar", 3, 50);
    q.accept();

    assert_eq!(q.advance(2), QuestProgress::Advanced { progress: 2, target: 3 });
    assert_eq!(q.advance(5), QuestProgress::Completed { reward: 50 });
    assert_eq!(q.progress(), 3);
    assert_eq!(
        q.advance(1),
        QuestProgress::Ignored("quest is already completed")
    );
    assert!(q.is_completed());
}

#[test]
fn abandon_only_unfinished() {
    let mut q = Quest::new("Herbs", 1, 10);
    q.accept();
    q.advance(1);
    assert!(!q.abandon());

    let mut other = Quest::new("Wolves", 4, 30);
    assert!(other.abandon());
    assert_eq!(other.status(), QuestStatus::Abandoned);
    assert!(!other.accept());
}

// ── QuestLog ─────────────────────────────────────────────────────

#[test]
fn log_pays_reward_once() {
    let mut log = QuestLog::new();
    let id = log.accept(Quest::new("Rat Cellar", 2, 50)).unwrap();

    log.advance(id, 2).unwrap();
    log.advance(id, 2).unwrap();

    assert_eq!(log.gold_earned(), 50);
    assert_eq!(log.completed().count(), 1);
    assert_eq!(log.active().count(), 0);
}

#[test]
fn log_journal_records_lifecycle() {
    let mut log = QuestLog::new();
    let id = log.accept(Quest::new("Herbs", 2, 10)).unwrap();
    log.advance(id, 1).unwrap();
    log.advance(id, 1).unwrap();
    log.advance(id, 1).unwrap();

    let names: Vec<&str> = log.journal().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["quest_accepted", "quest_progressed", "quest_completed"]
    );
}

#[test]
fn log_rejects_duplicate_quest() {
    let mut log = QuestLog::new();
    let quest = Quest::new("Herbs", 2, 10);
    log.accept(quest.clone()).unwrap();
    assert!(matches!(
        log.accept(quest),
        Err(ModelError::QuestAlreadyAccepted(_))
    ));
    assert_eq!(log.len(), 1);
}

#[test]
fn log_unknown_quest() {
    let mut log = QuestLog::new();
    assert!(matches!(
        log.advance(QuestId::new(), 1),
        Err(ModelError::QuestNotFound(_))
    ));
}

#[test]
fn log_serde_roundtrip_drops_journal() {
    let mut log = QuestLog::new();
    let id = log.accept(Quest::new("Herbs", 2, 10)).unwrap();
    log.advance(id, 2).unwrap();

    let json = serde_json::to_string(&log).unwrap();
    let back: QuestLog = serde_json::from_str(&json).unwrap();

    assert_eq!(back, log);
    assert!(back.journal().is_empty());
    assert_eq!(back.find_by_title("Herbs").unwrap().status(), QuestStatus::Completed);
}
