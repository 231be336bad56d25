//! JSON-document persistence for the swipe log.
//!
//! The durable state is one array of ISO-8601 date-times in a single file,
//! read and replaced whole. There is no append-only format and no partial
//! record recovery: a store that fails to deserialize reads as an empty log.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};

use crate::errors::{AppError, AppResult};

pub struct SwipeStore {
    path: PathBuf,
}

impl SwipeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full swipe list. Missing, empty, or corrupt files all read
    /// as an empty log; persistence problems never take the tool down.
    pub fn load(&self) -> Vec<NaiveDateTime> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Replace the whole store. The write goes through a sibling temp file
    /// and a rename, so a concurrent reader sees either the old list or the
    /// new one, never a torn file.
    pub fn save(&self, swipes: &[NaiveDateTime]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json =
            serde_json::to_string_pretty(swipes).map_err(|e| AppError::Store(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    /// Remove the store file. Missing file counts as already cleared.
    pub fn remove(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Distinct `(year, month)` values present in the log, newest first.
    /// Drives the clear-month flow.
    pub fn available_months(&self) -> Vec<(i32, u32)> {
        let mut months: Vec<(i32, u32)> = self
            .load()
            .iter()
            .map(|t| (t.year(), t.month()))
            .collect();

        months.sort_unstable();
        months.dedup();
        months.reverse();
        months
    }
}
