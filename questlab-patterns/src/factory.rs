//! Factories: callers ask for an enemy by kind or by name and get back a
//! `Box<dyn Creature>` without naming the concrete type.
//!
//! [`EnemyFactory`] knows a fixed set of recipes. [`EnemyRegistry`] lets
//! callers register constructors at runtime, e.g. from a mod or a test.

use crate::inheritance::{Boss, Creature, Monster};
use crate::singleton::Settings;
use crate::{PatternError, PatternResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Skeleton,
    Dragon,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [Self::Goblin, Self::Orc, Self::Skeleton, Self::Dragon];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goblin => "goblin",
            Self::Orc => "orc",
            Self::Skeleton => "skeleton",
            Self::Dragon => "dragon",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnemyKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| PatternError::UnknownEnemy {
                name: s.to_string(),
                suggestions: close_names(&wanted, Self::ALL.iter().map(|k| k.as_str())),
            })
    }
}

/// Names that look like a typo of `wanted`: one contains the other, or
/// they share their first two letters.
pub fn close_names<'a>(wanted: &str, known: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let wanted = wanted.to_lowercase();
    let prefix: String = wanted.chars().take(2).collect();
    known
        .into_iter()
        .filter(|name| {
            let name = name.to_lowercase();
            !wanted.is_empty()
                && (name.contains(&wanted)
                    || wanted.contains(&name)
                    || (prefix.chars().count() == 2 && name.starts_with(&prefix)))
        })
        .map(str::to_string)
        .collect()
}

/// Builds enemies from fixed recipes, scaled by the caller's settings.
#[derive(Debug, Clone, Default)]
pub struct EnemyFactory {
    settings: Settings,
    spawned: u32,
}

impl EnemyFactory {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            spawned: 0,
        }
    }

    /// How many enemies this factory has produced.
    #[must_use]
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn create(&mut self, kind: EnemyKind) -> Box<dyn Creature> {
        self.spawned += 1;
        let n = self.spawned;
        let hp = |base: u32| self.settings.scaled_enemy_health(base);
        debug!(kind = %kind, n, "Spawning enemy");
        match kind {
            EnemyKind::Goblin => Box::new(
                Monster::new(format!("Goblin #{n}"), "goblin", hp(30), 5).with_loot("Copper Coin"),
            ),
            EnemyKind::Orc => Box::new(
                Monster::new(format!("Orc #{n}"), "orc", hp(60), 9).with_loot("Rusty Axe"),
            ),
            EnemyKind::Skeleton => Box::new(
                Monster::new(format!("Skeleton #{n}"), "skeleton", hp(40), 7).with_loot("Bone"),
            ),
            EnemyKind::Dragon => Box::new(Boss::new(
                Monster::new("Ignis", "dragon", hp(300), 25)
                    .with_loot("Dragon Scale")
                    .with_loot("Hoard of Gold"),
                8,
            )),
        }
    }

    /// Looks the kind up by name, e.g. from a level file.
    pub fn create_named(&mut self, name: &str) -> PatternResult<Box<dyn Creature>> {
        let kind: EnemyKind = name.parse()?;
        Ok(self.create(kind))
    }

    /// A wave of `count` enemies of one kind.
    pub fn wave(&mut self, kind: EnemyKind, count: usize) -> Vec<Box<dyn Creature>> {
        (0..count).map(|_| self.create(kind)).collect()
    }
}

type Constructor = Box<dyn Fn() -> Box<dyn Creature> + Send + Sync>;

/// A factory whose recipes are registered at runtime.
#[derive(Default)]
pub struct EnemyRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl fmt::Debug for EnemyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnemyRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl EnemyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-filled with every [`EnemyKind`] at default settings.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in EnemyKind::ALL {
            registry.register(kind.as_str(), move || EnemyFactory::default().create(kind));
        }
        registry
    }

    /// Registers (or replaces) a constructor. Names are case-insensitive.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn() -> Box<dyn Creature> + Send + Sync + 'static,
    {
        let key = name.to_lowercase();
        if self.constructors.insert(key.clone(), Box::new(constructor)).is_some() {
            info!(enemy = %key, "Enemy recipe replaced");
        } else {
            debug!(enemy = %key, "Enemy recipe registered");
        }
    }

    pub fn create(&self, name: &str) -> PatternResult<Box<dyn Creature>> {
        let key = name.trim().to_lowercase();
        match self.constructors.get(&key) {
            Some(constructor) => Ok(constructor()),
            None => Err(PatternError::UnknownEnemy {
                name: name.to_string(),
                suggestions: close_names(&key, self.constructors.keys().map(String::as_str)),
            }),
        }
    }

    /// Registered names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }
}
