//! JSON file record store implementation.
//!
//! The backing file is a single JSON object mapping decimal user id strings
//! to record objects. Writes stage the full new content at `<path>.tmp` and
//! then rename it over the prior file in one indivisible replace.

use crate::{RecordMap, RecordStore};
use corso_core::{UserId, UserRecord};
use corso_error::{CorsoResult, StoreError, StoreErrorKind};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Filesystem-backed record store.
///
/// # Examples
///
/// ```no_run
/// use corso_store::{JsonFileStore, RecordStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = JsonFileStore::new("users.json");
/// let records = store.read().await;
/// println!("{} users on record", records.len());
/// # }
/// ```
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes stage+rename so concurrent writers never interleave on the
    // shared staging file.
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given backing file. The file need not exist;
    /// it is created by the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Staging path: the backing path with `.tmp` appended.
    fn staging_path(&self) -> PathBuf {
        let mut staged = OsString::from(self.path.as_os_str());
        staged.push(".tmp");
        PathBuf::from(staged)
    }

    fn parse(&self, raw: &str) -> RecordMap {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Store file is not valid JSON, treating as empty");
                return RecordMap::new();
            }
        };

        let Some(object) = value.as_object() else {
            warn!(path = %self.path.display(), "Store root is not an object, treating as empty");
            return RecordMap::new();
        };

        let mut records = RecordMap::new();
        for (key, body) in object {
            let Ok(id) = key.parse::<UserId>() else {
                warn!(key = %key, "Skipping record with non-numeric id");
                continue;
            };
            match serde_json::from_value::<UserRecord>(body.clone()) {
                Ok(record) => {
                    records.insert(id, record);
                }
                Err(e) => {
                    warn!(user = %id, error = %e, "Skipping malformed record");
                }
            }
        }
        records
    }
}

#[async_trait::async_trait]
impl RecordStore for JsonFileStore {
    async fn read(&self) -> RecordMap {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return RecordMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read store file, treating as empty");
                return RecordMap::new();
            }
        };

        if raw.trim().is_empty() {
            return RecordMap::new();
        }

        self.parse(&raw)
    }

    async fn write(&self, records: &RecordMap) -> CorsoResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Stable decimal-string keys for readable diffs.
        let wire: BTreeMap<String, &UserRecord> = records
            .iter()
            .map(|(id, record)| (id.to_string(), record))
            .collect();

        let json = serde_json::to_string_pretty(&wire)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialize(e.to_string())))?;

        let staged = self.staging_path();
        tokio::fs::write(&staged, json).await.map_err(|e| {
            StoreError::new(StoreErrorKind::Stage(format!(
                "{}: {}",
                staged.display(),
                e
            )))
        })?;

        tokio::fs::rename(&staged, &self.path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::Replace(format!(
                "{} -> {}: {}",
                staged.display(),
                self.path.display(),
                e
            )))
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Persisted records");
        Ok(())
    }
}
