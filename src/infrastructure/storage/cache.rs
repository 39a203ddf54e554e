// File-backed prediction store
use crate::domain::error::AstroError;
use crate::domain::model::InsightRecord;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Key-value store for generated predictions, persisted as a single
/// human-readable JSON file.
///
/// The whole store is loaded at startup, mutated in memory, and fully
/// rewritten to disk on every `set`. Fine at this write volume; an
/// embedded store would replace it if that ever changes.
pub struct RecordCache {
    path: PathBuf,
    entries: DashMap<String, InsightRecord>,
    persist_lock: Mutex<()>,
}

impl RecordCache {
    /// Open the store at `path`, creating an empty file when absent.
    ///
    /// An unreadable or malformed file resets to an empty store instead
    /// of failing startup. That trades durability for availability:
    /// corruption loses the cached predictions, so it is logged.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AstroError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let entries = DashMap::new();
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                match serde_json::from_str::<BTreeMap<String, InsightRecord>>(&content) {
                    Ok(stored) => {
                        for (key, record) in stored {
                            entries.insert(key, record);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "cache file is malformed, starting with an empty store"
                        );
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tokio::fs::write(&path, b"{}").await?;
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "cache file is unreadable, starting with an empty store"
                );
            }
        }

        Ok(Self {
            path,
            entries,
            persist_lock: Mutex::new(()),
        })
    }

    /// Never errors; an absent key is simply `None`.
    pub fn get(&self, key: &str) -> Option<InsightRecord> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Insert (last write wins) and rewrite the backing file before
    /// returning. No write buffering.
    pub async fn set(&self, key: &str, record: InsightRecord) -> Result<(), AstroError> {
        self.entries.insert(key.to_string(), record);
        self.persist().await
    }

    async fn persist(&self) -> Result<(), AstroError> {
        // One file writer at a time; a sorted snapshot keeps rewrites
        // deterministic.
        let _guard = self.persist_lock.lock().await;
        let snapshot: BTreeMap<String, InsightRecord> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let content = serde_json::to_vec_pretty(&snapshot)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
