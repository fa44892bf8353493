//! Save files.
//!
//! A [`SaveData`] is a flat, ordered map from keys to strings, integers,
//! floats or booleans. It can be written in two formats:
//!
//! - **Key/value text** (`.sav`, `.txt`): one `key = value` per line, `#`
//!   comments, strings always quoted with JSON escapes so `"42"` stays a
//!   string. Hand-edited files may leave simple strings unquoted.
//! - **JSON** (`.json`): a single object.
//!
//! Reading back a written file yields an equal map. Non-finite floats are
//! rejected on write because neither format can carry them faithfully.
//!
//! [`GameState`] is the nested variant: character, inventory and quest log
//! as one JSON document.

use crate::errors::load_with_fallback;
use crate::filesystem::write_atomic;
use crate::{BasicsError, BasicsResult};
use chrono::{DateTime, Utc};
use questlab_model::{Character, Inventory, QuestLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A single saved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaveValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SaveValue {
    fn to_kv_literal(&self, key: &str) -> BasicsResult<String> {
        Ok(match self {
            Self::Bool(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            // Debug always keeps a `.` or exponent, so the value reads back as a float.
            Self::Float(f) if f.is_finite() => format!("{f:?}"),
            Self::Float(_) => return Err(BasicsError::NonFiniteFloat(key.to_string())),
            Self::Text(s) => serde_json::to_string(s)?,
        })
    }

    fn from_kv_literal(raw: &str) -> Result<Self, String> {
        if raw.starts_with('"') {
            return serde_json::from_str::<String>(raw)
                .map(Self::Text)
                .map_err(|e| format!("bad quoted string: {e}"));
        }
        match raw {
            "true" => return Ok(Self::Bool(true)),
            "false" => return Ok(Self::Bool(false)),
            _ => {}
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Ok(Self::Integer(i));
        }
        if looks_numeric(raw) {
            if let Ok(f) = raw.parse::<f64>() {
                return Ok(Self::Float(f));
            }
        }
        Ok(Self::Text(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Words like `inf` or `nan` parse as floats but are meant as text.
fn looks_numeric(raw: &str) -> bool {
    raw.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
}

impl fmt::Display for SaveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SaveValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SaveValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for SaveValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for SaveValue {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for SaveValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for SaveValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SaveValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// On-disk format of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    KeyValue,
    Json,
}

impl SaveFormat {
    /// Picks the format from the file extension; anything but `.json` is
    /// key/value text.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::KeyValue,
        }
    }
}

/// A flat save-game map, kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveData {
    entries: BTreeMap<String, SaveValue>,
}

impl SaveData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SaveValue>) -> Option<SaveValue> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SaveValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SaveValue::as_str)
    }

    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(SaveValue::as_i64)
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(SaveValue::as_f64)
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(SaveValue::as_bool)
    }

    pub fn remove(&mut self, key: &str) -> Option<SaveValue> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SaveValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ── Key/value text ───────────────────────────────────────────

    /// Renders the map as `key = value` lines under a header comment.
    pub fn to_kv_string(&self) -> BasicsResult<String> {
        let mut out = String::from("# questlab save\n");
        for (key, value) in &self.entries {
            validate_key(key)?;
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(&value.to_kv_literal(key)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Parses `key = value` lines. Blank lines and `#` comments are
    /// skipped; a repeated key keeps its last value.
    pub fn from_kv_str(input: &str) -> BasicsResult<Self> {
        let mut data = Self::new();
        for (idx, raw_line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, raw_value) = line.split_once('=').ok_or_else(|| BasicsError::Format {
                line: line_no,
                message: "expected `key = value`".into(),
            })?;
            let key = key.trim();
            validate_key(key).map_err(|_| BasicsError::Format {
                line: line_no,
                message: format!("invalid key {key:?}"),
            })?;
            let value = SaveValue::from_kv_literal(raw_value.trim()).map_err(|message| {
                BasicsError::Format {
                    line: line_no,
                    message,
                }
            })?;
            if data.set(key, value).is_some() {
                debug!(key, line = line_no, "Duplicate key, keeping the later value");
            }
        }
        Ok(data)
    }

    // ── JSON ─────────────────────────────────────────────────────

    pub fn to_json(&self) -> BasicsResult<String> {
        if let Some((key, _)) = self
            .entries
            .iter()
            .find(|(_, v)| matches!(v, SaveValue::Float(f) if !f.is_finite()))
        {
            return Err(BasicsError::NonFiniteFloat(key.clone()));
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> BasicsResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    // ── Files ────────────────────────────────────────────────────

    /// Serializes in the given format.
    pub fn encode(&self, format: SaveFormat) -> BasicsResult<String> {
        match format {
            SaveFormat::KeyValue => self.to_kv_string(),
            SaveFormat::Json => self.to_json(),
        }
    }

    pub fn decode(input: &str, format: SaveFormat) -> BasicsResult<Self> {
        match format {
            SaveFormat::KeyValue => Self::from_kv_str(input),
            SaveFormat::Json => Self::from_json(input),
        }
    }

    /// Writes the save atomically, choosing the format from the extension.
    pub fn save(&self, path: &Path) -> BasicsResult<()> {
        let encoded = self.encode(SaveFormat::for_path(path))?;
        write_atomic(path, encoded.as_bytes())
    }

    pub fn load(path: &Path) -> BasicsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::decode(&contents, SaveFormat::for_path(path))
    }

    /// Loads a save, or starts fresh with a warning if it cannot be read.
    pub fn load_or_default(path: &Path) -> Self {
        load_with_fallback(path, Self::load)
    }
}

impl<K: Into<String>, V: Into<SaveValue>> FromIterator<(K, V)> for SaveData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn validate_key(key: &str) -> BasicsResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('#')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(BasicsError::InvalidKey(key.to_string()))
    }
}

/// A full game snapshot: the tree-of-mappings save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub hero: Character,
    pub inventory: Inventory,
    pub quests: QuestLog,
    pub gold: u64,
    pub saved_at: DateTime<Utc>,
}

impl GameState {
    /// A fresh game for a new hero.
    pub fn new(hero: Character, inventory_capacity: usize) -> Self {
        Self {
            hero,
            inventory: Inventory::with_capacity(inventory_capacity),
            quests: QuestLog::new(),
            gold: 0,
            saved_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> BasicsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> BasicsResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Stamps `saved_at` and writes the snapshot atomically.
    pub fn save(&mut self, path: &Path) -> BasicsResult<()> {
        self.saved_at = Utc::now();
        write_atomic(path, self.to_json()?.as_bytes())
    }

    pub fn load(path: &Path) -> BasicsResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// A flat summary suitable for the key/value format.
    #[must_use]
    pub fn summary(&self) -> SaveData {
        let mut data = SaveData::new();
        data.set("hero.name", self.hero.name.as_str());
        data.set("hero.level", self.hero.level());
        data.set("hero.health", self.hero.health().current());
        data.set("hero.alive", self.hero.is_alive());
        data.set("inventory.items", self.inventory.len() as i64);
        data.set("quests.completed", self.quests.completed().count() as i64);
        data.set("gold", self.gold as i64);
        data
    }
}
