//! Error types for the domain model.

use crate::Item;
use questlab_types::QuestId;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by inventory and quest-log operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The inventory has no free slot. The rejected item is handed back.
    #[error("inventory is full ({capacity} slots), cannot add {}", .item.name)]
    InventoryFull { capacity: usize, item: Box<Item> },

    /// No item with that name or id is in the inventory.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// The quest id is not in the log.
    #[error("quest not found: {0}")]
    QuestNotFound(QuestId),

    /// The quest is already in the log.
    #[error("quest already accepted: {0}")]
    QuestAlreadyAccepted(String),
}
