//! Singleton: one settings instance for the whole process.
//!
//! [`GameSettings::global`] lazily creates the instance in a `OnceLock`;
//! every call returns the same `&'static` reference. Interior state sits
//! behind an `RwLock` so the shared instance can still be changed.
//!
//! Most code does not need a global at all. [`Settings`] is the same data
//! as a plain value that callers own and pass where it is needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Multiplier applied to enemy health, in percent.
    #[must_use]
    pub fn enemy_health_percent(self) -> u32 {
        match self {
            Self::Easy => 75,
            Self::Normal => 100,
            Self::Hard => 150,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        })
    }
}

/// Game options as a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// 0 to 100.
    pub volume: u8,
    pub show_damage_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            volume: 70,
            show_damage_numbers: true,
        }
    }
}

impl Settings {
    /// Enemy health scaled for the chosen difficulty.
    #[must_use]
    pub fn scaled_enemy_health(&self, base: u32) -> u32 {
        base.saturating_mul(self.difficulty.enemy_health_percent()) / 100
    }
}

/// The process-wide settings holder.
#[derive(Debug, Default)]
pub struct GameSettings {
    inner: RwLock<Settings>,
}

static GLOBAL: OnceLock<GameSettings> = OnceLock::new();

impl GameSettings {
    /// The single shared instance, created on first use.
    pub fn global() -> &'static GameSettings {
        GLOBAL.get_or_init(|| {
            info!("Game settings initialized");
            GameSettings::default()
        })
    }

    /// A copy of the current values.
    #[must_use]
    pub fn snapshot(&self) -> Settings {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.snapshot().difficulty
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) {
        self.update(|s| s.difficulty = difficulty);
    }

    #[must_use]
    pub fn volume(&self) -> u8 {
        self.snapshot().volume
    }

    /// Sets the volume, clamped to 100.
    pub fn set_volume(&self, volume: u8) {
        self.update(|s| s.volume = volume.min(100));
    }

    /// Replaces every value at once.
    pub fn replace(&self, settings: Settings) {
        self.update(|s| *s = settings);
    }

    fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

/// True when both references point at the same instance.
#[must_use]
pub fn same_instance(a: &GameSettings, b: &GameSettings) -> bool {
    std::ptr::eq(a, b)
}
