//! Edit an entry through a scratch copy
//!
//! The editor never touches the entry file itself. The entry is copied to a
//! scratch file, the editor runs on the copy, and the copy replaces the entry
//! only if its bytes differ.

use crate::application::operator::Operator;
use crate::application::touch_entry::TouchService;
use crate::domain::Answer;
use crate::error::{JctlError, Result};
use crate::infrastructure::{Config, EntryLock, EntryStore, FileSystemEntryStore};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const MAX_SCRATCH_ATTEMPTS: usize = 1000;

/// Result of closing an edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    Committed,
}

/// One edit of one entry. Dropping the session discards the scratch file.
#[derive(Debug)]
pub struct SafeEditSession<'a> {
    store: &'a FileSystemEntryStore,
    name: String,
    scratch: PathBuf,
    _lock: EntryLock,
}

impl<'a> SafeEditSession<'a> {
    /// Lock the entry and copy it to a fresh scratch file
    pub fn open(
        store: &'a FileSystemEntryStore,
        config: &Config,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let original = store.path_for(name);
        let lock = EntryLock::acquire(name, &original)?;

        let scratch = reserve_scratch_file(
            &config.scratch_dir(),
            &config.scratch_prefix,
            store.extension(),
            now,
        )?;

        if let Err(e) = fs::copy(&original, &scratch) {
            let _ = fs::remove_file(&scratch);
            return Err(JctlError::Io(e));
        }

        debug!(entry = name, scratch = %scratch.display(), "opened edit session");
        Ok(SafeEditSession {
            store,
            name: name.to_string(),
            scratch,
            _lock: lock,
        })
    }

    pub fn scratch_path(&self) -> &Path {
        &self.scratch
    }

    /// Compare the scratch copy with the entry and commit it if it differs
    pub fn finish(self) -> Result<EditOutcome> {
        let original = self.store.path_for(&self.name);
        let edited = fs::read(&self.scratch)?;
        let current = fs::read(&original)?;

        if edited == current {
            debug!(entry = %self.name, "scratch file unchanged");
            return Ok(EditOutcome::Unchanged);
        }

        if let Err(e) = fs::rename(&self.scratch, &original) {
            // Typically a scratch dir on another filesystem
            debug!(error = %e, "rename failed, copying through the journal directory");
            self.store.write_entry_bytes(&self.name, &edited)?;
        }

        info!(entry = %self.name, "committed edit");
        Ok(EditOutcome::Committed)
    }
}

impl Drop for SafeEditSession<'_> {
    fn drop(&mut self) {
        match fs::remove_file(&self.scratch) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(scratch = %self.scratch.display(), error = %e, "could not remove scratch file"),
        }
    }
}

/// Create `<prefix><YYYYmmdd-HHMMSS>[-N].<ext>` exclusively in `dir`
fn reserve_scratch_file(
    dir: &Path,
    prefix: &str,
    extension: &str,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stamp = now.format("%Y%m%d-%H%M%S");

    for attempt in 0..MAX_SCRATCH_ATTEMPTS {
        let file_name = match attempt {
            0 => format!("{}{}.{}", prefix, stamp, extension),
            n => format!("{}{}-{}.{}", prefix, stamp, n, extension),
        };
        let path = dir.join(file_name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => return Ok(path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(JctlError::Io(e)),
        }
    }

    Err(JctlError::Io(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free scratch file name in {}", dir.display()),
    )))
}

/// Service running the whole edit workflow for one resolved entry
pub struct EditEntryService<'a> {
    store: &'a FileSystemEntryStore,
    config: &'a Config,
}

impl<'a> EditEntryService<'a> {
    pub fn new(store: &'a FileSystemEntryStore, config: &'a Config) -> Self {
        EditEntryService { store, config }
    }

    /// Edit `name` with `editor`, then offer a timestamp refresh if it changed.
    /// Returns the entry's name afterwards, which differs if it was renamed.
    pub fn execute<E>(
        &self,
        name: &str,
        now: NaiveDateTime,
        editor: E,
        operator: &mut dyn Operator,
    ) -> Result<String>
    where
        E: FnOnce(&Path) -> Result<()>,
    {
        let session = SafeEditSession::open(self.store, self.config, name, now)?;
        editor(session.scratch_path())?;

        match session.finish()? {
            EditOutcome::Unchanged => {
                operator.say("No changes made.")?;
                Ok(name.to_string())
            }
            EditOutcome::Committed => {
                operator.say("File changed.")?;

                match operator.confirm("Update timestamp?")? {
                    Answer::Yes => {
                        let touch = TouchService::new(self.store, self.config);
                        let current = touch.refresh(name, now)?;
                        operator.say("Timestamp updated.")?;
                        if current != name {
                            operator.say(&format!("Entry renamed to {}", current))?;
                        }
                        Ok(current)
                    }
                    Answer::No | Answer::Indeterminate => Ok(name.to_string()),
                }
            }
        }
    }
}
