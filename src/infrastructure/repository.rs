//! File system entry store

use crate::domain::Entry;
use crate::error::{JctlError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Abstract store of journal entries, addressed by name (no extension)
pub trait EntryStore {
    /// Get the journal directory of this store
    fn root(&self) -> &Path;

    /// Entry file extension without the leading dot
    fn extension(&self) -> &str;

    /// Names of all entries, newest first
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Path of the file for `name`; the file need not exist
    fn path_for(&self, name: &str) -> PathBuf {
        self.root().join(format!("{}.{}", name, self.extension()))
    }

    /// Check if an entry file exists
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Raw text of an entry
    fn read_entry(&self, name: &str) -> Result<String>;

    /// Replace an entry's content (write to temp, then rename)
    fn write_entry(&self, name: &str, content: &str) -> Result<()>;

    /// Move an entry to a new name; never overwrites
    fn rename(&self, from: &str, to: &str) -> Result<()>;
}

/// File system implementation of EntryStore
#[derive(Debug, Clone)]
pub struct FileSystemEntryStore {
    pub root: PathBuf,
    extension: String,
}

impl FileSystemEntryStore {
    /// Create a store over `root` for files ending in `.<extension>`
    pub fn new(root: PathBuf, extension: &str) -> Self {
        FileSystemEntryStore {
            root,
            extension: extension.to_string(),
        }
    }

    fn entry_name_from_file(&self, file_name: &str) -> Option<String> {
        if file_name.starts_with('.') {
            return None;
        }
        let stem = file_name
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        (!stem.is_empty()).then(|| stem.to_string())
    }

    /// Parse an entry
    pub fn load(&self, name: &str) -> Result<Entry> {
        let raw = self.read_entry(name)?;
        Entry::parse(name, &raw)
    }

    /// Serialize and persist an entry under its name
    pub fn save(&self, entry: &Entry) -> Result<()> {
        self.write_entry(&entry.name, &entry.to_text())
    }

    /// Create a new entry file; fails if one already exists
    pub fn create_entry(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_for(name);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => JctlError::EntryExists(name.to_string()),
                _ => JctlError::Io(e),
            })?;

        if let Err(e) = file.write_all(content.as_bytes()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(JctlError::Io(e));
        }

        debug!(entry = name, "created entry");
        Ok(())
    }

    /// Replace an entry's bytes through a temp file in the journal directory
    pub fn write_entry_bytes(&self, name: &str, content: &[u8]) -> Result<()> {
        let path = self.path_for(name);
        let tmp_path = self.root.join(format!(
            ".{}.{}.jctl-tmp-{}",
            name,
            self.extension,
            std::process::id()
        ));

        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JctlError::Io(e));
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JctlError::Io(e));
        }

        Ok(())
    }
}

impl EntryStore for FileSystemEntryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn list_entries(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(JctlError::JournalNotFound(self.root.clone()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                JctlError::Io(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if let Some(name) = self.entry_name_from_file(file_name) {
                names.push(name);
            }
        }

        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }

    fn read_entry(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.path_for(name)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => JctlError::EntryNotFound(name.to_string()),
            _ => JctlError::Io(e),
        })
    }

    fn write_entry(&self, name: &str, content: &str) -> Result<()> {
        self.write_entry_bytes(name, content.as_bytes())
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.path_for(from);
        let to_path = self.path_for(to);

        if !from_path.is_file() {
            return Err(JctlError::EntryNotFound(from.to_string()));
        }

        // A hard link fails atomically when the destination exists.
        match fs::hard_link(&from_path, &to_path) {
            Ok(()) => fs::remove_file(&from_path)?,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(JctlError::EntryExists(to.to_string()));
            }
            Err(e) => {
                debug!(error = %e, "hard link unavailable, falling back to rename");
                if to_path.exists() {
                    return Err(JctlError::EntryExists(to.to_string()));
                }
                fs::rename(&from_path, &to_path)?;
            }
        }

        debug!(from, to, "renamed entry");
        Ok(())
    }
}
