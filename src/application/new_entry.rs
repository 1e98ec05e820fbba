//! Create entry use case

use crate::domain::entry::entry_name;
use crate::error::{JctlError, Result};
use crate::infrastructure::{FileSystemEntryStore, NewEntry, Slugger, Templater};
use chrono::NaiveDateTime;
use tracing::info;

/// Service for creating dated entries
pub struct NewEntryService<'a> {
    store: &'a FileSystemEntryStore,
    slugger: &'a dyn Slugger,
    templater: &'a dyn Templater,
}

impl<'a> NewEntryService<'a> {
    pub fn new(
        store: &'a FileSystemEntryStore,
        slugger: &'a dyn Slugger,
        templater: &'a dyn Templater,
    ) -> Self {
        NewEntryService {
            store,
            slugger,
            templater,
        }
    }

    /// Create `<date>-<slug>` for `title`; fails if that entry exists
    pub fn execute(&self, title: &str, layout: &str, now: NaiveDateTime) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(JctlError::Usage("Entry title must not be empty".to_string()));
        }
        if title.contains('\n') {
            return Err(JctlError::Usage(
                "Entry title must be a single line".to_string(),
            ));
        }

        let slug = self.slugger.slugify(title)?;
        let name = entry_name(now.date(), &slug);

        self.templater.create(
            self.store,
            &NewEntry {
                name: &name,
                title,
                layout,
                created: now,
            },
        )?;

        info!(entry = %name, layout, "created entry");
        Ok(name)
    }
}
