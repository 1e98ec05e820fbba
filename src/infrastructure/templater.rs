//! Creating the file for a new entry

use crate::domain::load_template;
use crate::error::{JctlError, Result};
use crate::infrastructure::process::ExternalCommand;
use crate::infrastructure::repository::{EntryStore, FileSystemEntryStore};
use crate::infrastructure::Config;
use chrono::NaiveDateTime;
use std::ffi::OsStr;
use tracing::debug;

/// What to create
#[derive(Debug, Clone, Copy)]
pub struct NewEntry<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub layout: &'a str,
    pub created: NaiveDateTime,
}

/// Writes the initial content of a new entry file
pub trait Templater {
    fn create(&self, store: &FileSystemEntryStore, entry: &NewEntry<'_>) -> Result<()>;
}

/// Renders built-in or `.jctl/templates` templates in-process
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTemplater;

impl Templater for BuiltinTemplater {
    fn create(&self, store: &FileSystemEntryStore, entry: &NewEntry<'_>) -> Result<()> {
        let template = load_template(store.root(), entry.layout)?;
        let content = template.render(entry.title, entry.layout, entry.created);
        store.create_entry(entry.name, &content)
    }
}

/// Delegates to `templater <layout> <dest-path> <title>`
#[derive(Debug, Clone)]
pub struct CommandTemplater {
    command: ExternalCommand,
}

impl CommandTemplater {
    pub fn new(command: &str) -> Self {
        CommandTemplater {
            command: ExternalCommand::new("templater", command),
        }
    }
}

impl Templater for CommandTemplater {
    fn create(&self, store: &FileSystemEntryStore, entry: &NewEntry<'_>) -> Result<()> {
        // The external tool may overwrite, so check first
        if store.exists(entry.name) {
            return Err(JctlError::EntryExists(entry.name.to_string()));
        }

        let dest = store.path_for(entry.name);
        self.command.run([
            OsStr::new(entry.layout),
            dest.as_os_str(),
            OsStr::new(entry.title),
        ])?;

        if !dest.is_file() {
            return Err(JctlError::collaborator(
                self.command.tool(),
                format!("did not create {}", dest.display()),
            ));
        }

        debug!(entry = entry.name, "templater created entry");
        Ok(())
    }
}

/// Templater selected by the configuration
pub fn templater_for(config: &Config) -> Box<dyn Templater> {
    match &config.templater {
        Some(command) => Box::new(CommandTemplater::new(command)),
        None => Box::new(BuiltinTemplater),
    }
}
