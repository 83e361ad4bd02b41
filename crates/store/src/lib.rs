//! High-score persistence.
//!
//! The table is stored as a JSON array of objects with the fields
//! `Name`, `Score`, `Level` and `Date`. Loading never fails the game: a
//! missing or unreadable file yields an empty table, missing fields take
//! their zero value, and records that still do not fit are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use stellar_blocks_core::{HighScoreEntry, HighScoreTable};

/// Default file name, relative to the working directory.
pub const DEFAULT_SCORES_FILE: &str = "highscores.json";

/// Format of the `Date` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// On-disk shape of one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct HighScoreRecord {
    name: String,
    score: u32,
    level: u32,
    date: String,
}

impl From<&HighScoreEntry> for HighScoreRecord {
    fn from(e: &HighScoreEntry) -> Self {
        Self {
            name: e.name.clone(),
            score: e.score,
            level: e.level,
            date: e.date.clone(),
        }
    }
}

impl From<HighScoreRecord> for HighScoreEntry {
    fn from(r: HighScoreRecord) -> Self {
        HighScoreEntry::new(&r.name, r.score, r.level, r.date)
    }
}

/// Local time formatted for the `Date` field.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table, reporting why a present file could not be used.
    ///
    /// A file that does not exist yet is an empty table, not an error.
    pub fn try_load(&self) -> Result<HighScoreTable> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScoreTable::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };

        // A record that does not fit is dropped on its own.
        let values: Vec<serde_json::Value> = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        let entries = values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<HighScoreRecord>(value).ok())
            .map(HighScoreEntry::from)
            .collect();
        Ok(HighScoreTable::from_entries(entries))
    }

    /// Load the table; any failure yields an empty one.
    pub fn load(&self) -> HighScoreTable {
        self.try_load().unwrap_or_default()
    }

    /// Write the whole table, replacing the file.
    pub fn save(&self, table: &HighScoreTable) -> Result<()> {
        let records: Vec<HighScoreRecord> = table.entries().iter().map(HighScoreRecord::from).collect();
        let text = serde_json::to_string_pretty(&records).context("encoding high scores")?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}
