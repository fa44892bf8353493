use questlab_types::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Misc,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Potion => "potion",
            Self::Misc => "misc",
        };
        f.write_str(label)
    }
}

/// A piece of loot.
///
/// `power` means damage for weapons, defense for armor and healing for
/// potions; it is zero for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Price in gold.
    pub value: u32,
    pub power: u32,
    pub weight: f32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, value: u32) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            value,
            power: 0,
            weight: 1.0,
        }
    }

    pub fn weapon(name: impl Into<String>, value: u32, damage: u32) -> Self {
        Self::new(name, ItemKind::Weapon, value).with_power(damage)
    }

    pub fn armor(name: impl Into<String>, value: u32, defense: u32) -> Self {
        Self::new(name, ItemKind::Armor, value).with_power(defense)
    }

    pub fn potion(name: impl Into<String>, value: u32, heal: u32) -> Self {
        Self::new(name, ItemKind::Potion, value)
            .with_power(heal)
            .with_weight(0.2)
    }

    pub fn misc(name: impl Into<String>, value: u32) -> Self {
        Self::new(name, ItemKind::Misc, value)
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}g)", self.name, self.kind, self.value)
    }
}
