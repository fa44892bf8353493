//! The toy game domain shared by the Questlab demos.
//!
//! - [`Health`] — a clamped `[0, max]` hit-point pool
//! - [`Character`] — a named fighter that attacks, takes damage, heals and levels up
//! - [`Item`] / [`Inventory`] — loot in a bag with a fixed number of slots
//! - [`Quest`] / [`QuestLog`] — objectives that complete exactly once
//!
//! The only invariants are the obvious range constraints: health never leaves
//! `[0, max_health]`, an inventory never holds more than its capacity, and a
//! quest pays out its reward a single time.

mod character;
mod error;
mod health;
mod inventory;
mod item;
mod quest;
mod quest_log;

pub use character::{ActionOutcome, Character};
pub use error::{ModelError, ModelResult};
pub use health::Health;
pub use inventory::Inventory;
pub use item::{Item, ItemKind};
pub use quest::{Quest, QuestProgress, QuestStatus};
pub use quest_log::QuestLog;
