use questlab_types::{CharacterId, Error, ItemId, QuestId};
use std::collections::HashSet;
use std::str::FromStr;

// ── CharacterId ──────────────────────────────────────────────────

#[test]
fn character_id_new_is_unique() {
    assert_ne!(CharacterId::new(), CharacterId::new());
}

#[test]
fn character_id_display_and_parse() {
    let id = CharacterId::new();
    let parsed = CharacterId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn character_id_parse_invalid() {
    let err = CharacterId::parse("not-a-uuid").unwrap_err();
    assert!(matches!(err, Error::BadId(_)));
    assert!(err.to_string().starts_with("not a valid id: "), "{err}");
}

#[test]
fn character_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    assert_eq!(CharacterId::from_uuid(uuid).as_uuid(), uuid);
}

// ── ItemId ───────────────────────────────────────────────────────

#[test]
fn item_id_from_str() {
    let id = ItemId::new();
    let parsed = ItemId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn item_id_from_str_invalid() {
    assert!(ItemId::from_str("garbage").is_err());
}

#[test]
fn item_ids_are_time_ordered() {
    let first = ItemId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = ItemId::new();
    assert!(first < second);
}

// ── QuestId ──────────────────────────────────────────────────────

#[test]
fn quest_id_hash_and_eq() {
    let id = QuestId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn quest_id_serializes_as_plain_string() {
    let id = QuestId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let parsed: QuestId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}
