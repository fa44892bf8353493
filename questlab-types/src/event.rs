//! Game events.
//!
//! An event records one thing that happened to one subject. Demos print
//! them, observers react to them, and the filesystem demo appends them to a
//! log. Events are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum GameEventKind {
    /// `attacker` hit `target` for `damage`, leaving it at `remaining` health.
    Attacked {
        attacker: String,
        target: String,
        damage: u32,
        remaining: u32,
    },

    /// `target` recovered `amount` health.
    Healed {
        target: String,
        amount: u32,
        current: u32,
    },

    /// `target` dropped to zero health.
    Died { target: String },

    /// A character reached a new level.
    LevelUp { character: String, level: u32 },

    // ── Inventory ───────────────────────────────────────────────
    ItemAdded { owner: String, item: String },

    ItemRemoved { owner: String, item: String },

    // ── Quests ──────────────────────────────────────────────────
    QuestAccepted { title: String },

    QuestProgressed {
        title: String,
        progress: u32,
        target: u32,
    },

    /// Emitted once per quest, together with its reward.
    QuestCompleted { title: String, reward: u32 },
}

/// A timestamped [`GameEventKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: GameEventKind,
    pub occurred_at: DateTime<Utc>,
}

impl GameEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn now(kind: GameEventKind) -> Self {
        Self {
            kind,
            occurred_at: Utc::now(),
        }
    }

    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub fn at(kind: GameEventKind, occurred_at: DateTime<Utc>) -> Self {
        Self { kind, occurred_at }
    }

    /// Short machine-friendly name of the event kind, e.g. `"quest_completed"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match &self.kind {
            GameEventKind::Attacked { .. } => "attacked",
            GameEventKind::Healed { .. } => "healed",
            GameEventKind::Died { .. } => "died",
            GameEventKind::LevelUp { .. } => "level_up",
            GameEventKind::ItemAdded { .. } => "item_added",
            GameEventKind::ItemRemoved { .. } => "item_removed",
            GameEventKind::QuestAccepted { .. } => "quest_accepted",
            GameEventKind::QuestProgressed { .. } => "quest_progressed",
            GameEventKind::QuestCompleted { .. } => "quest_completed",
        }
    }

    /// One-line narrative of the event.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            GameEventKind::Attacked {
                attacker,
                target,
                damage,
                remaining,
            } => format!("{attacker} hits {target} for {damage} damage ({remaining} HP left)"),
            GameEventKind::Healed {
                target,
                amount,
                current,
            } => format!("{target} heals {amount} HP (now {current} HP)"),
            GameEventKind::Died { target } => format!("{target} has fallen"),
            GameEventKind::LevelUp { character, level } => {
                format!("{character} reached level {level}")
            }
            GameEventKind::ItemAdded { owner, item } => format!("{owner} picked up {item}"),
            GameEventKind::ItemRemoved { owner, item } => format!("{owner} dropped {item}"),
            GameEventKind::QuestAccepted { title } => format!("Quest accepted: {title}"),
            GameEventKind::QuestProgressed {
                title,
                progress,
                target,
            } => format!("Quest '{title}': {progress}/{target}"),
            GameEventKind::QuestCompleted { title, reward } => {
                format!("Quest '{title}' completed, reward: {reward} gold")
            }
        }
    }

    /// Serializes the event to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses an event from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
