//! File-backed slot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::HistorySlot;
use crate::config::data_dir;
use crate::error::{PersistenceError, Result};

/// Slot stored as `<dir>/<key>.json`.
///
/// Characters in `key` other than ASCII letters, digits, `-` and `_` are
/// replaced with `_` in the file name, so the file always lands in `dir`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Slot for `key` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{}.json", file_stem(&key)));
        Self { key, path }
    }

    /// Slot for `key` in the per-user data directory.
    ///
    /// Returns `None` if the platform-specific directory cannot be determined.
    pub fn in_data_dir(key: impl Into<String>) -> Option<Self> {
        data_dir().map(|dir| Self::new(dir, key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn file_stem(key: &str) -> String {
    if key.is_empty() {
        return "_".to_string();
    }
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl HistorySlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Uses atomic write (temp file + rename) so a crash mid-save leaves
    /// the previous log intact.
    fn write(&mut self, blob: &[u8]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(blob).map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), bytes = blob.len(), "wrote history slot");
        Ok(())
    }
}
