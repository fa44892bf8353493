//! Inheritance without classes: a trait supplies shared behavior through
//! default methods, implementors supply state through required accessors.
//!
//! A [`Boss`] "extends" a [`Monster`] by owning one and overriding the
//! methods whose behavior changes.

use questlab_model::Health;
use tracing::debug;

/// Anything that can be fought.
pub trait Creature {
    fn name(&self) -> &str;
    fn health(&self) -> &Health;
    fn health_mut(&mut self) -> &mut Health;
    fn attack_power(&self) -> u32;

    /// Short label for the creature's family, used in descriptions.
    fn kind(&self) -> &'static str {
        "creature"
    }

    fn is_alive(&self) -> bool {
        self.health().is_alive()
    }

    /// Damage this creature deals with a normal attack.
    fn attack_damage(&self) -> u32 {
        if self.is_alive() { self.attack_power() } else { 0 }
    }

    /// Applies damage and returns the health actually lost.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = self.health_mut().damage(amount);
        debug!(creature = %self.name(), lost, "Damage taken");
        lost
    }

    fn describe(&self) -> String {
        let health = self.health();
        format!(
            "{} the {} ({}/{} HP)",
            self.name(),
            self.kind(),
            health.current(),
            health.max()
        )
    }
}

/// Lets one creature hit another, returning the health the target lost.
pub fn strike(attacker: &dyn Creature, target: &mut dyn Creature) -> u32 {
    if !target.is_alive() {
        return 0;
    }
    target.take_damage(attacker.attack_damage())
}

/// A player character with a gold purse.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    health: Health,
    attack_power: u32,
    pub gold: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32) -> Self {
        Self {
            name: name.into(),
            health: Health::new(max_health),
            attack_power,
            gold: 0,
        }
    }

    /// Drinks a potion, returning the health restored.
    pub fn drink_potion(&mut self, strength: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        self.health.heal(strength)
    }
}

impl Creature for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn kind(&self) -> &'static str {
        "adventurer"
    }
}

/// An ordinary monster carrying some loot.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    name: String,
    species: &'static str,
    health: Health,
    attack_power: u32,
    loot: Vec<String>,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        species: &'static str,
        max_health: u32,
        attack_power: u32,
    ) -> Self {
        Self {
            name: name.into(),
            species,
            health: Health::new(max_health),
            attack_power,
            loot: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_loot(mut self, item: impl Into<String>) -> Self {
        self.loot.push(item.into());
        self
    }

    #[must_use]
    pub fn loot(&self) -> &[String] {
        &self.loot
    }

    /// Hands over the loot once the monster is defeated.
    pub fn drop_loot(&mut self) -> Vec<String> {
        if self.is_alive() {
            Vec::new()
        } else {
            std::mem::take(&mut self.loot)
        }
    }
}

impl Creature for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn kind(&self) -> &'static str {
        self.species
    }
}

/// A monster with armor that becomes enraged below half health.
///
/// Enraged bosses hit twice as hard.
#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    base: Monster,
    armor: u32,
    enraged: bool,
}

impl Boss {
    pub fn new(base: Monster, armor: u32) -> Self {
        Self {
            base,
            armor,
            enraged: false,
        }
    }

    #[must_use]
    pub fn is_enraged(&self) -> bool {
        self.enraged
    }

    #[must_use]
    pub fn armor(&self) -> u32 {
        self.armor
    }

    /// The monster this boss is built on.
    #[must_use]
    pub fn base(&self) -> &Monster {
        &self.base
    }

    pub fn drop_loot(&mut self) -> Vec<String> {
        self.base.drop_loot()
    }
}

impl Creature for Boss {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn health(&self) -> &Health {
        self.base.health()
    }

    fn health_mut(&mut self) -> &mut Health {
        self.base.health_mut()
    }

    fn attack_power(&self) -> u32 {
        self.base.attack_power()
    }

    fn kind(&self) -> &'static str {
        self.base.kind()
    }

    fn attack_damage(&self) -> u32 {
        let base = self.base.attack_damage();
        if self.enraged {
            base.saturating_mul(2)
        } else {
            base
        }
    }

    /// Armor absorbs part of every hit; crossing half health enrages.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = self.base.take_damage(amount.saturating_sub(self.armor));
        if !self.enraged && self.is_alive() && self.health().fraction() < 0.5 {
            self.enraged = true;
            debug!(boss = %self.name(), "Boss is enraged");
        }
        lost
    }

    fn describe(&self) -> String {
        let mood = if self.enraged { ", enraged" } else { "" };
        format!("BOSS {} [armor {}{mood}]", self.base.describe(), self.armor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_methods_use_accessors() {
        let goblin = Monster::new("Snik", "goblin", 30, 5);
        assert_eq!(goblin.describe(), "Snik the goblin (30/30 HP)");
        assert!(goblin.is_alive());
    }

    #[test]
    fn dead_creatures_deal_no_damage() {
        let mut goblin = Monster::new("Snik", "goblin", 30, 5);
        goblin.take_damage(100);
        assert_eq!(goblin.attack_damage(), 0);
    }
}
