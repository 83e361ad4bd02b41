//! High-score table: at most ten entries, best score first.
//!
//! The table is pure data. Loading and saving live in the store crate.

use crate::types::{MAX_HIGH_SCORES, MAX_NAME_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
    pub level: u32,
    /// Local time the game ended, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

impl HighScoreEntry {
    /// Build an entry, cutting the name down to 12 characters.
    pub fn new(name: &str, score: u32, level: u32, date: impl Into<String>) -> Self {
        Self {
            name: clamp_name(name),
            score,
            level,
            date: date.into(),
        }
    }
}

/// Trim a player name to the maximum length (in characters).
pub fn clamp_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from unsorted entries (e.g. a file written by hand).
    pub fn from_entries(entries: Vec<HighScoreEntry>) -> Self {
        let mut entries: Vec<_> = entries
            .into_iter()
            .map(|e| HighScoreEntry {
                name: clamp_name(&e.name),
                ..e
            })
            .collect();
        // Stable: equal scores keep their recorded order.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    /// Insert a finished game.
    ///
    /// Returns the 0-based rank, or `None` when the score did not make the table.
    /// Among equal scores the older entry ranks first.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Would `score` earn a place in the table?
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
