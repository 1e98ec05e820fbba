//! Find entries by keyword and narrow them down to one

use crate::application::operator::Operator;
use crate::domain::matcher::{match_by_content, match_by_name};
use crate::domain::SelectionState;
use crate::error::{JctlError, Result};
use crate::infrastructure::EntryStore;
use std::io::ErrorKind;
use tracing::{debug, warn};

/// Entries whose name contains every keyword, newest first
pub fn find_by_name<S: EntryStore>(store: &S, keywords: &[String]) -> Result<Vec<String>> {
    let matches = match_by_name(store.list_entries()?, keywords);
    debug!(?keywords, count = matches.len(), "matched entry names");
    Ok(matches)
}

/// Entries whose text contains every keyword (ignoring case), newest first
pub fn find_by_content<S: EntryStore>(store: &S, keywords: &[String]) -> Result<Vec<String>> {
    let mut texts = Vec::new();

    for name in store.list_entries()? {
        match store.read_entry(&name) {
            Ok(text) => texts.push((name, text)),
            Err(JctlError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                warn!(entry = %name, "skipping entry that is not valid UTF-8");
            }
            Err(e) => return Err(e),
        }
    }

    let matches = match_by_content(texts, keywords);
    debug!(?keywords, count = matches.len(), "matched entry text");
    Ok(matches)
}

/// Reduce a match set to a single entry, asking the operator if needed
pub fn resolve_one(
    matches: &[String],
    query: &str,
    operator: &mut dyn Operator,
) -> Result<String> {
    if matches.is_empty() {
        return Err(JctlError::NoEntriesFound(query.to_string()));
    }

    if matches.len() > 1 {
        debug!(count = matches.len(), "several entries found");
        operator.say("More than one entry found for your query.")?;
    }

    match operator.choose(matches)? {
        SelectionState::Resolved(index) => {
            let name = matches[index].clone();
            debug!(entry = %name, "resolved entry");
            Ok(name)
        }
        SelectionState::Cancelled | SelectionState::Prompting => {
            Err(JctlError::SelectionCancelled)
        }
    }
}
