use crate::Health;
use questlab_types::{CharacterId, GameEvent, GameEventKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Experience needed to go from `level` to `level + 1`.
const XP_PER_LEVEL: u32 = 100;

/// Maximum health gained on every level-up.
const HEALTH_PER_LEVEL: u32 = 10;

/// Result of an action that may be refused.
///
/// Invalid actions (attacking a corpse, healing the dead) are not errors:
/// nothing changes and the reason is reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The action happened; these events describe it.
    Applied(Vec<GameEvent>),
    /// Nothing happened, for this reason.
    Ignored(String),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Events produced by the action; empty when it was ignored.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        match self {
            Self::Applied(events) => events,
            Self::Ignored(_) => &[],
        }
    }
}

/// A fighter in the toy world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    health: Health,
    pub attack_power: u32,
    level: u32,
    xp: u32,
}

impl Character {
    /// Creates a level-1 character at full health.
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            health: Health::new(max_health),
            attack_power,
            level: 1,
            xp: 0,
        }
    }

    #[must_use]
    pub fn health(&self) -> Health {
        self.health
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Hits `target` for this character's attack power.
    pub fn attack(&self, target: &mut Character) -> ActionOutcome {
        if !self.is_alive() {
            return ignored(format!("{} cannot attack while defeated", self.name));
        }
        if !target.is_alive() {
            return ignored(format!("{} is already defeated", target.name));
        }
        let mut events = Vec::with_capacity(2);
        let dealt = target.health.damage(self.attack_power);
        events.push(GameEvent::now(GameEventKind::Attacked {
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage: dealt,
            remaining: target.health.current(),
        }));
        info!(attacker = %self.name, target = %target.name, damage = dealt, "Attack landed");
        if !target.is_alive() {
            events.push(died(&target.name));
        }
        ActionOutcome::Applied(events)
    }

    /// Applies raw damage from the environment (traps, poison).
    pub fn take_damage(&mut self, amount: u32) -> ActionOutcome {
        if !self.is_alive() {
            return ignored(format!("{} is already defeated", self.name));
        }
        let lost = self.health.damage(amount);
        debug!(character = %self.name, lost, remaining = self.health.current(), "Took damage");
        let mut events = vec![GameEvent::now(GameEventKind::Attacked {
            attacker: "the environment".into(),
            target: self.name.clone(),
            damage: lost,
            remaining: self.health.current(),
        })];
        if !self.is_alive() {
            events.push(died(&self.name));
        }
        ActionOutcome::Applied(events)
    }

    /// Restores health; the dead cannot be healed.
    pub fn heal(&mut self, amount: u32) -> ActionOutcome {
        if !self.is_alive() {
            return ignored(format!("{} is defeated and cannot be healed", self.name));
        }
        let gained = self.health.heal(amount);
        ActionOutcome::Applied(vec![GameEvent::now(GameEventKind::Healed {
            target: self.name.clone(),
            amount: gained,
            current: self.health.current(),
        })])
    }

    /// Adds experience, levelling up as many times as it allows.
    ///
    /// Each level costs `100 * level` xp and raises max health by 10.
    pub fn gain_xp(&mut self, amount: u32) -> Vec<GameEvent> {
        self.xp = self.xp.saturating_add(amount);
        let mut events = Vec::new();
        while self.xp >= Self::xp_to_next(self.level) {
            self.xp -= Self::xp_to_next(self.level);
            self.level += 1;
            self.health.raise_max(HEALTH_PER_LEVEL);
            info!(character = %self.name, level = self.level, "Level up");
            events.push(GameEvent::now(GameEventKind::LevelUp {
                character: self.name.clone(),
                level: self.level,
            }));
        }
        events
    }

    /// Experience needed to leave `level`.
    #[must_use]
    pub const fn xp_to_next(level: u32) -> u32 {
        XP_PER_LEVEL.saturating_mul(level)
    }
}

fn ignored(reason: String) -> ActionOutcome {
    debug!(%reason, "Action ignored");
    ActionOutcome::Ignored(reason)
}

fn died(name: &str) -> GameEvent {
    info!(character = %name, "Character defeated");
    GameEvent::now(GameEventKind::Died {
        target: name.to_string(),
    })
}
