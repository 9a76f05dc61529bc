//! Time-boxed memoization of the reconciled dataset.
//!
//! One JSON snapshot file with a `loaded_at` stamp; a load is served from
//! the snapshot while it is younger than the configured TTL. Eviction is
//! TTL-or-manual-clear only — `sync --force` and a successful annotation
//! save both call [`DatasetCache::invalidate`].

use crate::core::sync::Dataset;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

pub struct DatasetCache {
    path: PathBuf,
    ttl_secs: u64,
}

impl DatasetCache {
    pub fn new(path: PathBuf, ttl_secs: u64) -> Self {
        Self { path, ttl_secs }
    }

    /// Snapshot, if present and still fresh. A corrupt or stale file is
    /// treated as a miss, never as an error.
    pub fn load(&self) -> Option<Dataset> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let ds: Dataset = serde_json::from_str(&raw).ok()?;

        let loaded_at = DateTime::parse_from_rfc3339(&ds.loaded_at).ok()?;
        let age = Local::now().signed_duration_since(loaded_at);

        if age.num_seconds() < 0 || age.num_seconds() as u64 >= self.ttl_secs {
            return None;
        }
        Some(ds)
    }

    pub fn store(&self, dataset: &Dataset) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(dataset)?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Cache(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    pub fn invalidate(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| AppError::Cache(format!("{}: {}", self.path.display(), e)))?;
        }
        Ok(())
    }
}
