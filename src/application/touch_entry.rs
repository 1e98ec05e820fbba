//! Timestamp refresh and file name fixup

use crate::domain::entry::{entry_name, TITLE_KEY};
use crate::error::Result;
use crate::infrastructure::{slugger_for, Config, EntryStore, FileSystemEntryStore, Slugger};
use chrono::NaiveDateTime;
use tracing::info;

/// Set the entry's `date` to `now`; nothing else in the file changes
pub fn update_time(store: &FileSystemEntryStore, name: &str, now: NaiveDateTime) -> Result<()> {
    let mut entry = store.load(name)?;
    entry.set_timestamp(now)?;
    store.save(&entry)?;

    info!(entry = name, "updated timestamp");
    Ok(())
}

/// Make the entry's name agree with its `date` and `title`, optionally
/// setting `date` first. Returns the (possibly new) entry name.
pub fn fix_entry(
    store: &FileSystemEntryStore,
    slugger: &dyn Slugger,
    name: &str,
    date: Option<NaiveDateTime>,
) -> Result<String> {
    let original = store.load(name)?;
    let mut entry = original.clone();

    if let Some(now) = date {
        entry.set_timestamp(now)?;
    }

    // Both keys must exist before anything is written
    entry.require(TITLE_KEY)?;
    let day = entry.date()?;
    let title = entry.title().unwrap_or_default();
    let slug = slugger.slugify(title)?;
    let canonical = entry_name(day, &slug);

    if canonical != name {
        // Fails without touching either file when `canonical` exists
        store.rename(name, &canonical)?;
        info!(from = name, to = %canonical, "renamed entry to match its metadata");
    }

    if entry != original {
        entry.name = canonical.clone();
        store.save(&entry)?;
    }

    Ok(canonical)
}

/// Refreshes timestamps the way the configuration asks for
pub struct TouchService<'a> {
    store: &'a FileSystemEntryStore,
    config: &'a Config,
}

impl<'a> TouchService<'a> {
    pub fn new(store: &'a FileSystemEntryStore, config: &'a Config) -> Self {
        TouchService { store, config }
    }

    /// Update the timestamp, also renaming when `rename_on_touch` is set
    pub fn refresh(&self, name: &str, now: NaiveDateTime) -> Result<String> {
        if self.config.rename_on_touch {
            fix_entry(self.store, slugger_for(self.config).as_ref(), name, Some(now))
        } else {
            update_time(self.store, name, now)?;
            Ok(name.to_string())
        }
    }

    /// Rename to match title and date without touching the timestamp
    pub fn fix(&self, name: &str) -> Result<String> {
        fix_entry(self.store, slugger_for(self.config).as_ref(), name, None)
    }
}
