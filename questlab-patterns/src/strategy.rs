//! Strategy: behavior chosen at runtime.
//!
//! A [`Fighter`] holds a boxed [`AttackStrategy`] that can be swapped
//! between rounds. Loot ordering shows the lighter-weight variant: a
//! strategy is just a closure.

use questlab_model::{Health, Item};
use std::cmp::Ordering;
use tracing::debug;

/// How a fighter trades offense against defense.
pub trait AttackStrategy {
    fn name(&self) -> &'static str;

    /// Damage dealt, given the fighter's base power.
    fn outgoing(&self, power: u32) -> u32;

    /// Damage actually taken from an incoming hit.
    fn incoming(&self, damage: u32) -> u32;
}

/// Hits 50% harder, takes 25% more damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

/// Hits half as hard, takes half damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defensive;

/// No modifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Balanced;

impl AttackStrategy for Aggressive {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn outgoing(&self, power: u32) -> u32 {
        power.saturating_mul(3) / 2
    }

    fn incoming(&self, damage: u32) -> u32 {
        damage.saturating_mul(5) / 4
    }
}

impl AttackStrategy for Defensive {
    fn name(&self) -> &'static str {
        "defensive"
    }

    fn outgoing(&self, power: u32) -> u32 {
        power / 2
    }

    fn incoming(&self, damage: u32) -> u32 {
        damage / 2
    }
}

impl AttackStrategy for Balanced {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn outgoing(&self, power: u32) -> u32 {
        power
    }

    fn incoming(&self, damage: u32) -> u32 {
        damage
    }
}

/// Picks a strategy from the fighter's situation: defend when hurt,
/// press the attack when the opponent is weak.
pub fn adaptive(own: &Health, opponent: &Health) -> Box<dyn AttackStrategy> {
    if own.fraction() < 0.3 {
        Box::new(Defensive)
    } else if opponent.fraction() < 0.3 {
        Box::new(Aggressive)
    } else {
        Box::new(Balanced)
    }
}

pub struct Fighter {
    pub name: String,
    health: Health,
    power: u32,
    strategy: Box<dyn AttackStrategy>,
}

impl std::fmt::Debug for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fighter")
            .field("name", &self.name)
            .field("health", &self.health)
            .field("power", &self.power)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Fighter {
    /// A fighter starts out balanced.
    pub fn new(name: impl Into<String>, max_health: u32, power: u32) -> Self {
        Self {
            name: name.into(),
            health: Health::new(max_health),
            power,
            strategy: Box::new(Balanced),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn AttackStrategy>) {
        debug!(
            fighter = %self.name,
            from = self.strategy.name(),
            to = strategy.name(),
            "Strategy changed"
        );
        self.strategy = strategy;
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[must_use]
    pub fn health(&self) -> &Health {
        &self.health
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Attacks `target`; both strategies shape the result. Returns the
    /// health the target lost.
    pub fn strike(&self, target: &mut Fighter) -> u32 {
        if !self.is_alive() || !target.is_alive() {
            return 0;
        }
        let raw = self.strategy.outgoing(self.power);
        let taken = target.strategy.incoming(raw);
        target.health.damage(taken)
    }

    /// Re-evaluates the strategy against `opponent` with [`adaptive`].
    pub fn adapt(&mut self, opponent: &Fighter) {
        let next = adaptive(&self.health, &opponent.health);
        if next.name() != self.strategy.name() {
            self.set_strategy(next);
        }
    }
}

/// Fights until one side falls or `max_rounds` pass, both sides adapting
/// each round. Returns the winner's name, if any.
pub fn duel(a: &mut Fighter, b: &mut Fighter, max_rounds: u32) -> Option<String> {
    for _ in 0..max_rounds {
        a.adapt(b);
        a.strike(b);
        if !b.is_alive() {
            return Some(a.name.clone());
        }
        b.adapt(a);
        b.strike(a);
        if !a.is_alive() {
            return Some(b.name.clone());
        }
    }
    None
}

/// A loot ordering is any comparison closure.
pub type LootOrder = Box<dyn Fn(&Item, &Item) -> Ordering>;

/// Named orderings a player can pick from a menu.
pub fn loot_order(name: &str) -> Option<LootOrder> {
    let order: LootOrder = match name {
        "value" => Box::new(|a: &Item, b: &Item| b.value.cmp(&a.value)),
        "weight" => Box::new(|a: &Item, b: &Item| a.weight.total_cmp(&b.weight)),
        "name" => Box::new(|a: &Item, b: &Item| a.name.cmp(&b.name)),
        "value_per_weight" => {
            Box::new(|a: &Item, b: &Item| value_density(b).total_cmp(&value_density(a)))
        }
        _ => return None,
    };
    Some(order)
}

fn value_density(item: &Item) -> f32 {
    if item.weight > 0.0 {
        item.value as f32 / item.weight
    } else {
        f32::INFINITY
    }
}

/// Sorts `items` with any strategy closure. The sort is stable.
pub fn sort_loot<F>(items: &mut [Item], order: F)
where
    F: Fn(&Item, &Item) -> Ordering,
{
    items.sort_by(order);
}
