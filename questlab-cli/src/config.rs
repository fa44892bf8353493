//! `questlab.toml`: optional settings shared by every demo.
//!
//! Every field has a default, so an empty or partial file is fine. A missing
//! file is normal; an unreadable or malformed one is logged and ignored.

use questlab_patterns::singleton::Settings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "questlab.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestlabConfig {
    /// Slots in a new hero's inventory.
    pub inventory_capacity: usize,
    pub starting_health: u32,
    /// Where the file demos write saves and logs.
    pub save_dir: PathBuf,
    /// Game log written by the filesystem demo. Defaults to
    /// `questlab.log` inside `save_dir`.
    pub log_file: Option<PathBuf>,
    /// Seed for dice and loot. Unset means a fresh seed every run.
    pub seed: Option<u64>,
    pub settings: Settings,
}

impl Default for QuestlabConfig {
    fn default() -> Self {
        Self {
            inventory_capacity: 10,
            starting_health: 100,
            save_dir: default_save_dir(),
            log_file: None,
            seed: None,
            settings: Settings::default(),
        }
    }
}

fn default_save_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("questlab")
}

/// `<config dir>/questlab/questlab.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("questlab")
        .join(CONFIG_FILE_NAME)
}

impl QuestlabConfig {
    /// Loads from `path`, or from [`default_config_path`] when none is given.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&default_config_path()),
        }
    }

    /// Loads a config file, falling back to defaults when it is missing or
    /// cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// The game log path, resolved against `save_dir`.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => self.save_dir.join(file),
            None => self.save_dir.join("questlab.log"),
        }
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
