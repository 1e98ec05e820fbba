//! List entries use case

use crate::application::find_entries::find_by_name;
use crate::error::{JctlError, Result};
use crate::infrastructure::FileSystemEntryStore;
use tracing::warn;

/// An entry name with its title, when the entry parses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub name: String,
    pub title: Option<String>,
}

/// List entries whose names contain every keyword, newest first
pub fn list_entries(store: &FileSystemEntryStore, keywords: &[String]) -> Result<Vec<EntrySummary>> {
    let mut summaries = Vec::new();

    for name in find_by_name(store, keywords)? {
        let title = match store.load(&name) {
            Ok(entry) => entry.title().map(str::to_string),
            Err(e @ JctlError::CorruptEntry { .. }) => {
                warn!("{}", e);
                None
            }
            Err(JctlError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => None,
            Err(e) => return Err(e),
        };
        summaries.push(EntrySummary { name, title });
    }

    Ok(summaries)
}
