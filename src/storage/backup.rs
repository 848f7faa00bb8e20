use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::storage::store::RecordStore;

/// Writes full-database backup files.
///
/// The backup is a pretty-printed JSON dump of all three collections plus an
/// export timestamp. There is intentionally no restore path for this format;
/// the only way back to a known state is `RecordStore::reset`.
pub struct BackupWriter<'a> {
    store: &'a RecordStore,
}

impl<'a> BackupWriter<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Default backup filename, timestamped to the second.
    pub fn default_filename() -> String {
        format!("fiberctl_db_backup_{}.json", Utc::now().format("%Y%m%d_%H%M%S"))
    }

    /// Write the backup to `path`, creating parent directories as needed.
    /// Returns the written path.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create backup directory: {}", parent.display())
                })?;
            }
        }

        let backup = self.store.full_backup();
        let content = serde_json::to_string_pretty(&backup)
            .with_context(|| "Failed to serialize backup")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write backup file: {}", path.display()))?;

        Ok(path)
    }
}
