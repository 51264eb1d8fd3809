//! Process-wide persisted key/value settings.
//!
//! The pad subsystem treats all values as opaque strings compared against
//! `"true"`/`"false"`; there are no numeric or enum settings. Values are
//! grouped by namespace and persisted as JSON next to the host's other
//! configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings format error: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsData {
    namespaces: BTreeMap<String, BTreeMap<String, String>>,
}

/// Namespaced string key/value store with optional file persistence.
#[derive(Debug, Default)]
pub struct SettingsStore {
    data: SettingsData,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// A store that never touches the filesystem. Used by tests and hosts
    /// that manage persistence themselves.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load settings from `path`. A missing file yields an empty store bound
    /// to that path; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file yet, starting empty");
                SettingsData::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            data,
            path: Some(path),
        })
    }

    /// Read a value, falling back to `default` when absent.
    pub fn read_setting(&self, namespace: &str, key: &str, default: &str) -> String {
        self.data
            .namespaces
            .get(namespace)
            .and_then(|ns| ns.get(key))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Write a value and persist immediately when a path is bound. A failed
    /// write-through is logged, not fatal: the in-memory state stays current.
    pub fn write_setting(&mut self, namespace: &str, key: &str, value: &str) {
        self.data
            .namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        if let Err(err) = self.save() {
            warn!(namespace, key, %err, "failed to persist setting");
        }
    }

    /// Persist to the bound path, if any.
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, text)?;
        Ok(())
    }
}
