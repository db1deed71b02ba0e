//! Request log store.
//!
//! Every HTTP request handled by the API is appended here with its method,
//! path, status and duration. The full list is kept in memory and rewritten
//! to a JSON file after each append so it survives restarts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

/// A single handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub method: String,
    pub path: String,
    pub status: u16,
    /// Whole milliseconds, zero-padded to two digits.
    pub duration: String,
}

impl RequestLogEntry {
    pub fn new(method: &str, path: &str, status: u16, elapsed: Duration) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            duration: format_duration(elapsed),
        }
    }

    /// One line of the plain-text log listing.
    pub fn to_line(&self) -> String {
        let separator = if self.path.ends_with("json") { "\t" } else { "\t\t" };
        format!(
            "{}\t\t{}{}{}\t\t{}ms\n",
            self.method, self.path, separator, self.status, self.duration
        )
    }
}

/// Truncate to whole milliseconds and pad below ten (`7` → `"07"`).
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:02}", elapsed.as_millis())
}

/// Render all entries as the plain-text listing served by `GET /logs`.
pub fn render_lines(entries: &[RequestLogEntry]) -> String {
    entries.iter().map(RequestLogEntry::to_line).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum LogStoreError {
    #[error("Log file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Log file encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// RequestLogStore
// ═══════════════════════════════════════════════════════════

/// Append-only request log backed by a JSON file.
pub struct RequestLogStore {
    path: PathBuf,
    entries: RwLock<Vec<RequestLogEntry>>,
    /// Serializes file writes so a stale snapshot never overwrites a newer one.
    write_lock: Mutex<()>,
}

impl RequestLogStore {
    /// Empty store that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_entries(path.into(), Vec::new())
    }

    fn with_entries(path: PathBuf, entries: Vec<RequestLogEntry>) -> Self {
        Self {
            path,
            entries: RwLock::new(entries),
            write_lock: Mutex::new(()),
        }
    }

    /// Load previously persisted entries from `path`.
    ///
    /// A missing or unreadable file is not an error: the store starts empty.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str::<Vec<RequestLogEntry>>(&contents) {
                Ok(entries) => {
                    tracing::info!(count = entries.len(), path = %path.display(), "Request log loaded");
                    entries
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Request log file is empty or malformed: {e}");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No request log file yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Cannot read request log file: {e}");
                Vec::new()
            }
        };
        Self::with_entries(path, entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, entry: RequestLogEntry) {
        self.entries.write().await.push(entry);
    }

    pub async fn entries(&self) -> Vec<RequestLogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Write the current entries to disk as pretty-printed JSON.
    pub async fn persist(&self) -> Result<(), LogStoreError> {
        let _guard = self.write_lock.lock().await;
        let json = {
            let entries = self.entries.read().await;
            serde_json::to_string_pretty(&*entries)?
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
