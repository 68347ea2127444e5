//! File-backed store

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use super::TokenStore;

/// Store persisted as a JSON object on disk.
///
/// Plays the role local storage plays for the web UI: a flat string
/// map that survives restarts. A corrupt or unreadable file degrades
/// to an empty store; write failures are logged and the in-memory
/// state stays authoritative for the process lifetime.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at the given path, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!("Failed to create {}: {}", parent.display(), e);
                    return;
                }
            }
        }

        match serde_json::to_string_pretty(entries) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    tracing::warn!("Failed to write {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session state: {}", e),
        }
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
            self.persist(&entries);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            if entries.remove(key).is_some() {
                self.persist(&entries);
            }
        }
    }
}
