//! Advisory per-entry locking for edit sessions

use crate::error::{JctlError, Result};
use fs2::FileExt;
use std::fs::File;
use std::path::Path;

/// Exclusive advisory lock on an entry file, released on drop.
///
/// Only other jctl processes honour it; editors and fixups outside an
/// edit session do not take it.
#[derive(Debug)]
pub struct EntryLock {
    file: File,
}

impl EntryLock {
    pub fn acquire(name: &str, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JctlError::EntryNotFound(name.to_string()),
            _ => JctlError::Io(e),
        })?;

        file.try_lock_exclusive()
            .map_err(|_| JctlError::EntryLocked(name.to_string()))?;

        Ok(EntryLock { file })
    }
}

impl Drop for EntryLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
