//! High-score persistence: a single integer behind a small JSON file.
//!
//! The engine never touches this; the runner reads the stored best at
//! startup and records a new one whenever the session score exceeds it.
//! A missing or unreadable file simply reads as zero, so a fresh install
//! and a corrupted file behave the same.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct StoredScore {
    best: u32,
}

/// File-backed store for the single best-score value.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open a store at `path`, reading the current best (0 when the file
    /// is missing or does not parse).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<StoredScore>(&text).ok())
            .map(|stored| stored.best)
            .unwrap_or(0);
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `score` if it exceeds the stored best, rewriting the file.
    /// Returns whether a new best was written.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }
        let json = serde_json::to_string(&StoredScore { best: score })?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing high score to {}", self.path.display()))?;
        Ok(true)
    }
}

/// Default store location: `$HOME/.blockfall/highscore.json`, falling back
/// to the working directory when HOME is unset.
pub fn default_store_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".blockfall").join("highscore.json"),
        None => PathBuf::from(".blockfall-highscore.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("blockfall-persist-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = scratch_path("missing.json");
        let _ = fs::remove_file(&path);
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let path = scratch_path("corrupt.json");
        fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn record_roundtrips_through_the_file() {
        let path = scratch_path("roundtrip.json");
        let _ = fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(1200).unwrap());
        drop(store);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 1200);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn record_only_writes_on_exceed() {
        let path = scratch_path("exceed.json");
        let _ = fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(500).unwrap());
        assert!(!store.record(500).unwrap());
        assert!(!store.record(100).unwrap());
        assert_eq!(store.best(), 500);
        assert!(store.record(501).unwrap());
        let _ = fs::remove_file(&path);
    }
}
