//! Polymorphism through trait objects.
//!
//! A battle roll call iterates a `Vec<Box<dyn Creature>>` of unrelated
//! types. Hero classes share the [`Hero`] trait and differ only in their
//! special move.

use crate::inheritance::{Creature, strike};
use questlab_model::Health;

/// Describes every combatant, whatever its concrete type.
pub fn roll_call(creatures: &[Box<dyn Creature>]) -> Vec<String> {
    creatures.iter().map(|c| c.describe()).collect()
}

/// Total damage the living creatures could deal in one round.
pub fn threat_level(creatures: &[Box<dyn Creature>]) -> u32 {
    creatures.iter().map(|c| c.attack_damage()).sum()
}

/// A playable class.
pub trait Hero: Creature {
    /// Name of the class, e.g. `"warrior"`.
    fn class(&self) -> &'static str;

    /// Uses the class ability on `target` and narrates what happened.
    fn special_move(&mut self, target: &mut dyn Creature) -> String;
}

/// Every living hero uses their special move on `target` in turn.
pub fn battle_round(heroes: &mut [Box<dyn Hero>], target: &mut dyn Creature) -> Vec<String> {
    let mut log = Vec::new();
    for hero in heroes.iter_mut() {
        if !target.is_alive() {
            log.push(format!("{} is already defeated", target.name()));
            break;
        }
        if hero.is_alive() {
            log.push(hero.special_move(target));
        }
    }
    log
}

macro_rules! hero_creature {
    ($ty:ty, $class:literal) => {
        impl Creature for $ty {
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
                $class
            }
        }
    };
}

/// Builds rage with every normal hit; Cleave spends it all for bonus damage.
#[derive(Debug, Clone)]
pub struct Warrior {
    name: String,
    health: Health,
    attack_power: u32,
    rage: u32,
}

impl Warrior {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(140),
            attack_power: 14,
            rage: 0,
        }
    }

    #[must_use]
    pub fn rage(&self) -> u32 {
        self.rage
    }

    /// A normal attack; builds 10 rage.
    pub fn hit(&mut self, target: &mut dyn Creature) -> u32 {
        self.rage = (self.rage + 10).min(100);
        strike(&*self, target)
    }
}

hero_creature!(Warrior, "warrior");

impl Hero for Warrior {
    fn class(&self) -> &'static str {
        "warrior"
    }

    fn special_move(&mut self, target: &mut dyn Creature) -> String {
        let damage = self.attack_power + self.rage / 2;
        self.rage = 0;
        let lost = target.take_damage(damage);
        format!("{} cleaves {} for {lost}", self.name, target.name())
    }
}

/// Fireball costs mana; an empty pool falls back to a staff bonk.
#[derive(Debug, Clone)]
pub struct Mage {
    name: String,
    health: Health,
    attack_power: u32,
    mana: u32,
}

impl Mage {
    pub const FIREBALL_COST: u32 = 30;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(80),
            attack_power: 6,
            mana: 100,
        }
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }
}

hero_creature!(Mage, "mage");

impl Hero for Mage {
    fn class(&self) -> &'static str {
        "mage"
    }

    fn special_move(&mut self, target: &mut dyn Creature) -> String {
        if self.mana < Self::FIREBALL_COST {
            let lost = strike(&*self, target);
            return format!(
                "{} is out of mana and bonks {} for {lost}",
                self.name,
                target.name()
            );
        }
        self.mana -= Self::FIREBALL_COST;
        let lost = target.take_damage(self.attack_power * 5);
        format!("{} hurls a fireball at {} for {lost}", self.name, target.name())
    }
}

/// Volley fires up to three arrows from a limited quiver.
#[derive(Debug, Clone)]
pub struct Archer {
    name: String,
    health: Health,
    attack_power: u32,
    arrows: u32,
}

impl Archer {
    pub fn new(name: impl Into<String>, arrows: u32) -> Self {
        Self {
            name: name.into(),
            health: Health::new(100),
            attack_power: 9,
            arrows,
        }
    }

    #[must_use]
    pub fn arrows(&self) -> u32 {
        self.arrows
    }
}

hero_creature!(Archer, "archer");

impl Hero for Archer {
    fn class(&self) -> &'static str {
        "archer"
    }

    fn special_move(&mut self, target: &mut dyn Creature) -> String {
        let volley = self.arrows.min(3);
        if volley == 0 {
            return format!("{} has no arrows left", self.name);
        }
        self.arrows -= volley;
        let lost: u32 = (0..volley)
            .map(|_| target.take_damage(self.attack_power))
            .sum();
        format!(
            "{} looses {volley} arrows at {} for {lost}",
            self.name,
            target.name()
        )
    }
}
