//! Clamped hit points.

use serde::{Deserialize, Serialize};

/// A hit-point pool that always stays within `[0, max]`.
///
/// Damage saturates at zero and healing saturates at `max`, so after
/// `damage(d)` the value is `max(0, h - d)` and after `heal(a)` it is
/// `min(max, h + a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HealthRepr")]
pub struct Health {
    current: u32,
    max: u32,
}

/// Wire shape; deserialization goes through [`Health::with_current`] so a
/// hand-edited save file cannot break the clamp.
#[derive(Deserialize)]
struct HealthRepr {
    current: u32,
    max: u32,
}

impl From<HealthRepr> for Health {
    fn from(repr: HealthRepr) -> Self {
        Self::with_current(repr.current, repr.max)
    }
}

impl Health {
    /// Creates a full pool.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a pool with an explicit current value, clamped to `max`.
    #[must_use]
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Current health as a fraction of max, in `[0.0, 1.0]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.max)
        }
    }

    /// Applies damage and returns how much was actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    /// Restores health and returns how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - before
    }

    /// Raises the maximum and grants the same amount of current health.
    pub fn raise_max(&mut self, amount: u32) {
        self.max = self.max.saturating_add(amount);
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}
