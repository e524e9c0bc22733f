//! Day-partitioned interaction log.
//!
//! Each calendar day (local time) owns one pretty-printed JSON array file,
//! `interactions_YYYYMMDD.json`. Appends rewrite the whole file under a
//! per-day lock, and reads take the same lock, so a stats read observes
//! every append that completed before it. An unreadable or corrupt file is
//! treated as an empty log.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tokio::fs;

use crate::aggregator::summarize;
use crate::types::{InteractionRecord, InteractionStats};

pub type LogResult<T> = Result<T, LogError>;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct InteractionLog {
    dir: PathBuf,
    day_locks: Mutex<HashMap<NaiveDate, Arc<tokio::sync::Mutex<()>>>>,
}

impl InteractionLog {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            day_locks: Mutex::new(HashMap::new()),
        }
    }

    pub async fn init(&self) -> LogResult<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("interactions_{}.json", date.format("%Y%m%d")))
    }

    /// Append `record` to the log of the day it was timestamped on.
    pub async fn record(&self, record: InteractionRecord) -> LogResult<()> {
        let date = record.timestamp.date_naive();
        let lock = self.day_lock(date);
        let _guard = lock.lock().await;

        let path = self.path_for(date);
        let mut records = load_records(&path).await;
        records.push(record);

        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(&records)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &path).await?;

        log::debug!("Logged interaction #{} to {:?}", records.len(), path);
        Ok(())
    }

    pub async fn records_for(&self, date: NaiveDate) -> Vec<InteractionRecord> {
        let lock = self.day_lock(date);
        let _guard = lock.lock().await;
        load_records(&self.path_for(date)).await
    }

    pub async fn stats_for(&self, date: NaiveDate) -> InteractionStats {
        let records = self.records_for(date).await;
        summarize(&records, date)
    }

    /// Statistics for the current local day.
    pub async fn stats(&self) -> InteractionStats {
        self.stats_for(Local::now().date_naive()).await
    }

    /// Lock guarding `date`'s file. Inserting a new day evicts locks for
    /// past days that no task currently holds.
    fn day_lock(&self, date: NaiveDate) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .day_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(lock) = locks.get(&date) {
            return lock.clone();
        }

        let today = Local::now().date_naive();
        locks.retain(|day, lock| *day >= today || Arc::strong_count(lock) > 1);

        let lock = Arc::new(tokio::sync::Mutex::new(()));
        locks.insert(date, lock.clone());
        lock
    }

    #[cfg(test)]
    fn tracked_days(&self) -> usize {
        self.day_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

async fn load_records(path: &Path) -> Vec<InteractionRecord> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(error) => {
            log::warn!("Failed to read interaction log {:?}: {}", path, error);
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(error) => {
            log::warn!(
                "Interaction log {:?} is corrupt, starting fresh: {}",
                path,
                error
            );
            Vec::new()
        }
    }
}
