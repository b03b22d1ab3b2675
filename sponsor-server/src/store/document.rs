//! Persisted data document and its file backend
//!
//! The whole state is one JSON document:
//!
//! ```json
//! { "sponsors": [], "deliverables": [], "settings": { "templates": [], "tiers": [], "activity": [], "purchasedLists": [] } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::models::{ActivityEntry, Deliverable, RECENT_ACTIVITY_LIMIT, Settings, Sponsor};
use tokio::sync::Mutex;

use super::StoreResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDocument {
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub settings: Settings,
}

impl DataDocument {
    /// Append an activity entry
    pub fn log(&mut self, title: impl Into<String>) {
        self.settings.activity.push(ActivityEntry::now(title));
    }

    /// Most recent entries, newest first
    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.settings
            .activity
            .iter()
            .rev()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect()
    }
}

/// Writes snapshots of the document to a single JSON file
///
/// Writes are serialized through an async mutex. Each write goes to a
/// sibling temp file first and is then renamed over the data file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document; a missing or empty file yields the default document
    pub async fn load(&self) -> StoreResult<DataDocument> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Data file not found, starting empty");
                return Ok(DataDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(DataDocument::default());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Persist a snapshot produced while the write lock is held
    ///
    /// `snapshot` runs after the lock is acquired so the last writer
    /// always stores the latest state.
    pub async fn save_with<F>(&self, snapshot: F) -> StoreResult<()>
    where
        F: FnOnce() -> serde_json::Result<Vec<u8>>,
    {
        let _guard = self.write_lock.lock().await;
        let bytes = snapshot()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
