//! A bag with a fixed number of slots.

use crate::{Item, ItemKind, ModelError, ModelResult};
use questlab_types::ItemId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Ordered collection of items bounded by `capacity`.
///
/// Every item takes one slot regardless of weight. A failed `add` leaves
/// the inventory exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    capacity: usize,
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory with `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Stores an item in the next free slot.
    ///
    /// When the inventory is full the item is returned inside
    /// [`ModelError::InventoryFull`].
    pub fn add(&mut self, item: Item) -> ModelResult<()> {
        if self.is_full() {
            warn!(item = %item.name, capacity = self.capacity, "Inventory full");
            return Err(ModelError::InventoryFull {
                capacity: self.capacity,
                item: Box::new(item),
            });
        }
        debug!(item = %item.name, slot = self.items.len(), "Item added");
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with the given id.
    pub fn remove(&mut self, id: ItemId) -> ModelResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| ModelError::ItemNotFound(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Removes the first item called `name`.
    pub fn remove_by_name(&mut self, name: &str) -> ModelResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| ModelError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(pos))
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// First item called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.kind == kind)
    }

    /// Sum of item values in gold.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.value)).sum()
    }

    #[must_use]
    pub fn total_weight(&self) -> f32 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Items ordered from most to least valuable; ties keep insertion order.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<&Item> {
        let mut sorted: Vec<&Item> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.value.cmp(&a.value));
        sorted
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
