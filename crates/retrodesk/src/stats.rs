//! Persisted phishing mini-game statistics.
//!
//! One flat record under one stable key: read once at mini-game mount,
//! rewritten on every change. Missing or corrupt data silently falls back
//! to the zero record; no error reaches the user.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Cumulative mini-game statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchStats {
    pub score: i64,
    pub streak: u32,
    pub best_streak: u32,
    pub total: u32,
    pub correct: u32,
    pub caught: u32,
}

impl CatchStats {
    /// Record one answered round.
    pub fn record(&mut self, correct: bool, caught: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        if caught {
            self.caught += 1;
        }
    }
}

/// JSON-file store for [`CatchStats`].
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the record; missing or undecodable data yields the zero record.
    pub fn load(&self) -> CatchStats {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return CatchStats::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "stats file undecodable, starting fresh");
            CatchStats::default()
        })
    }

    /// Rewrite the record.
    pub fn save(&self, stats: &CatchStats) -> Result<()> {
        let raw = serde_json::to_string(stats)
            .map_err(|err| crate::Error::Internal(format!("stats encode: {err}")))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_loads_zero_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));
        assert_eq!(store.load(), CatchStats::default());
    }

    #[test]
    fn corrupt_file_loads_zero_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "{not json").unwrap();
        let store = StatsStore::new(path);
        assert_eq!(store.load(), CatchStats::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));

        let mut stats = CatchStats::default();
        stats.record(true, true);
        stats.record(true, false);
        stats.record(false, false);
        store.save(&stats).unwrap();

        assert_eq!(store.load(), stats);
    }

    #[test]
    fn partial_record_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, r#"{"score": 40, "caught": 3}"#).unwrap();

        let stats = StatsStore::new(path).load();
        assert_eq!(stats.score, 40);
        assert_eq!(stats.caught, 3);
        assert_eq!(stats.best_streak, 0);
    }

    #[test]
    fn streak_tracking() {
        let mut stats = CatchStats::default();
        stats.record(true, true);
        stats.record(true, true);
        stats.record(false, false);
        stats.record(true, false);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.correct, 3);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.caught, 2);
    }
}
