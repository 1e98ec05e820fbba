//! Full-text search use case

use crate::application::find_entries::{find_by_content, resolve_one};
use crate::application::operator::Operator;
use crate::domain::Answer;
use crate::error::{JctlError, Result};
use crate::infrastructure::FileSystemEntryStore;

/// What the operator chose to do with the search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Open this entry
    Open(String),
    /// Matches were printed
    Listed(Vec<String>),
    /// The answer was neither yes nor no
    NothingDone,
}

pub struct SearchService<'a> {
    store: &'a FileSystemEntryStore,
}

impl<'a> SearchService<'a> {
    pub fn new(store: &'a FileSystemEntryStore) -> Self {
        SearchService { store }
    }

    pub fn execute(&self, keywords: &[String], operator: &mut dyn Operator) -> Result<SearchOutcome> {
        let matches = find_by_content(self.store, keywords)?;

        match matches.len() {
            0 => return Err(JctlError::NoEntriesFound(keywords.join(" "))),
            1 => operator.say("1 match found")?,
            n => operator.say(&format!("{} matches found", n))?,
        }

        match operator.confirm("Open a matched entry?")? {
            Answer::Yes => {
                let name = resolve_one(&matches, &keywords.join(" "), operator)?;
                Ok(SearchOutcome::Open(name))
            }
            Answer::No => {
                operator.say("Matches found in entries:")?;
                for name in &matches {
                    operator.say(&format!(" * {}", name))?;
                }
                Ok(SearchOutcome::Listed(matches))
            }
            Answer::Indeterminate => {
                operator.say("Response wasn't y/n, doing nothing.")?;
                Ok(SearchOutcome::NothingDone)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::Console;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, FileSystemEntryStore) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2024-01-01-alpha.md"), "---\n---\nGarden TODO\n").unwrap();
        fs::write(temp.path().join("2024-02-01-beta.md"), "---\n---\ngarden party\n").unwrap();
        fs::write(temp.path().join("2024-03-01-gamma.md"), "---\n---\nbooks\n").unwrap();
        let store = FileSystemEntryStore::new(temp.path().to_path_buf(), "md");
        (temp, store)
    }

    fn search(store: &FileSystemEntryStore, words: &[&str], input: &str) -> (Result<SearchOutcome>, String) {
        let keywords: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = SearchService::new(store).execute(&keywords, &mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_no_matches() {
        let (_temp, store) = fixture();
        let (result, output) = search(&store, &["tennis"], "");
        assert!(matches!(result, Err(JctlError::NoEntriesFound(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_decline_lists_matches() {
        let (_temp, store) = fixture();
        let (result, output) = search(&store, &["GARDEN"], "n\n");

        assert_eq!(
            result.unwrap(),
            SearchOutcome::Listed(vec![
                "2024-02-01-beta".to_string(),
                "2024-01-01-alpha".to_string()
            ])
        );
        assert!(output.contains("2 matches found"));
        assert!(output.contains(" * 2024-02-01-beta\n * 2024-01-01-alpha\n"));
    }

    #[test]
    fn test_accept_then_choose() {
        let (_temp, store) = fixture();
        let (result, _) = search(&store, &["garden"], "y\n2\n");
        assert_eq!(result.unwrap(), SearchOutcome::Open("2024-01-01-alpha".to_string()));
    }

    #[test]
    fn test_single_match_opens_without_list() {
        let (_temp, store) = fixture();
        let (result, output) = search(&store, &["books"], "yes\n");

        assert_eq!(result.unwrap(), SearchOutcome::Open("2024-03-01-gamma".to_string()));
        assert!(output.contains("1 match found"));
        assert!(!output.contains("Please enter the number"));
    }

    #[test]
    fn test_indeterminate_does_nothing() {
        let (_temp, store) = fixture();
        let (result, output) = search(&store, &["garden"], "what\n");
        assert_eq!(result.unwrap(), SearchOutcome::NothingDone);
        assert!(output.contains("wasn't y/n"));
    }

    #[test]
    fn test_accept_then_cancel() {
        let (_temp, store) = fixture();
        let (result, _) = search(&store, &["garden"], "y\nq\n");
        assert!(matches!(result, Err(JctlError::SelectionCancelled)));
    }
}
