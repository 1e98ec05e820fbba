//! Error types for jctl

use crate::domain::front_matter::FrontMatterError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for bad or missing arguments
pub const EXIT_USAGE: i32 = 2;
/// Exit code for an unknown subcommand
pub const EXIT_UNKNOWN_COMMAND: i32 = 64;

/// Main error type for jctl
#[derive(Debug, Error)]
pub enum JctlError {
    #[error("{0}")]
    Usage(String),

    #[error("No entries found for your query: {0}")]
    NoEntriesFound(String),

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Entry already exists: {0}")]
    EntryExists(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry is being edited elsewhere: {0}")]
    EntryLocked(String),

    #[error("{tool} failed: {reason}")]
    Collaborator { tool: String, reason: String },

    #[error("Corrupt front matter in '{name}': {source}")]
    CorruptEntry {
        name: String,
        #[source]
        source: FrontMatterError,
    },

    #[error("Entry '{name}' is missing required metadata '{key}'")]
    MissingMetadata { name: String, key: String },

    #[error("Journal directory not found: {0}")]
    JournalNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JctlError {
    /// Build a collaborator failure for the named tool
    pub fn collaborator(tool: &str, reason: impl Into<String>) -> Self {
        JctlError::Collaborator {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JctlError::Usage(_) => EXIT_USAGE,
            JctlError::NoEntriesFound(_) | JctlError::EntryNotFound(_) => 3,
            JctlError::SelectionCancelled => 4,
            JctlError::EntryExists(_) => 5,
            JctlError::Collaborator { .. } => 6,
            JctlError::CorruptEntry { .. } => 7,
            JctlError::MissingMetadata { .. } => 8,
            JctlError::EntryLocked(_) => 9,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JctlError::JournalNotFound(path) => {
                format!(
                    "Journal directory not found: {}\n\n\
                    Suggestions:\n\
                    • Create the directory, or\n\
                    • Set JCTL_DIR to your journal path",
                    path.display()
                )
            }
            JctlError::NoEntriesFound(query) => {
                format!(
                    "No entries found for your query: '{}'\n\n\
                    Suggestions:\n\
                    • Entry name matching is case-sensitive\n\
                    • Use 'jctl list' to see available entries\n\
                    • Use 'jctl search' to match on entry text instead",
                    query
                )
            }
            JctlError::Collaborator { tool, .. } if tool == "editor" => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=vim)\n\
                    • Configure editor: jctl config editor 'nano'",
                    self
                )
            }
            JctlError::MissingMetadata { key, .. } => {
                format!(
                    "{}\n\n\
                    Add a '{}: ...' line between the '---' separators of the entry.",
                    self, key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JctlError
pub type Result<T> = std::result::Result<T, JctlError>;
