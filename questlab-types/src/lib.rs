//! Shared vocabulary for the Questlab demos.
//!
//! Every demo crate speaks about the same toy world, so the few types that
//! cross crate boundaries live here:
//! - Character, item and quest identifiers (UUID v7)
//! - [`GameEvent`], the narrative record of something that happened
//!
//! Nothing in this crate performs I/O.

mod event;
mod ids;

pub use event::{GameEvent, GameEventKind};
pub use ids::{CharacterId, ItemId, QuestId};

/// Outcome of parsing an id or decoding an event.
pub type Result<T> = std::result::Result<T, Error>;

/// Why an id or a [`GameEvent`] could not be read back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Event JSON was malformed or missing fields.
    #[error("bad event JSON: {0}")]
    EventJson(#[from] serde_json::Error),

    /// An id string was not a UUID.
    #[error("not a valid id: {0}")]
    BadId(#[from] uuid::Error),
}
