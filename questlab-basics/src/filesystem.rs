//! Working with files: an append-only log, save-slot discovery, and writes
//! that never leave a half-written file behind.

use crate::BasicsResult;
use chrono::Utc;
use questlab_types::GameEvent;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

/// Extension used for save slots.
pub const SAVE_EXTENSION: &str = "sav";

/// A plain-text log where each line is prefixed with a UTC timestamp.
#[derive(Debug, Clone)]
pub struct GameLog {
    path: PathBuf,
}

impl GameLog {
    /// Opens (and if needed creates) the log file and its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> BasicsResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)?;
        debug!(path = %path.display(), "Game log opened");
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line. Embedded newlines are flattened to spaces.
    pub fn append(&self, message: &str) -> BasicsResult<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        let line = message.replace(['\r', '\n'], " ");
        writeln!(file, "[{}] {line}", Utc::now().format("%Y-%m-%d %H:%M:%S"))?;
        Ok(())
    }

    /// Appends the narrative form of an event.
    pub fn append_event(&self, event: &GameEvent) -> BasicsResult<()> {
        self.append(&event.describe())
    }

    /// Every line in the log, oldest first.
    pub fn read_lines(&self) -> BasicsResult<Vec<String>> {
        let file = fs::File::open(&self.path)?;
        let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    /// The last `n` lines.
    pub fn tail(&self, n: usize) -> BasicsResult<Vec<String>> {
        let mut lines = self.read_lines()?;
        let skip = lines.len().saturating_sub(n);
        Ok(lines.split_off(skip))
    }

    /// Strips the `[timestamp] ` prefix from a log line.
    #[must_use]
    pub fn message_of(line: &str) -> &str {
        line.split_once("] ").map_or(line, |(_, msg)| msg)
    }
}

/// Path of save slot `slot` inside `dir`, e.g. `saves/slot-2.sav`.
#[must_use]
pub fn slot_path(dir: &Path, slot: u32) -> PathBuf {
    dir.join(format!("slot-{slot}.{SAVE_EXTENSION}"))
}

/// Files in `dir` with the given extension, most recently modified first.
///
/// A missing directory simply has no saves.
pub fn list_save_files(dir: &Path, extension: &str) -> BasicsResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Save directory does not exist");
        return Ok(Vec::new());
    }
    let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            let modified = entry.metadata()?.modified()?;
            found.push((modified, path));
        }
    }
    found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    Ok(found.into_iter().map(|(_, p)| p).collect())
}

/// Writes `contents` to a sibling temp file and renames it over `path`,
/// so readers see either the old file or the new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> BasicsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), bytes = contents.len(), "File written");
    Ok(())
}

/// Copies `path` to `path.bak`, returning the backup path. Nothing is
/// copied if the original does not exist.
pub fn backup(path: &Path) -> BasicsResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    let bak = PathBuf::from(name);
    fs::copy(path, &bak)?;
    Ok(Some(bak))
}
