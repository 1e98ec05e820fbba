//! Turning entry titles into file-name slugs

use crate::domain::slug::{is_valid_slug, slugify};
use crate::error::{JctlError, Result};
use crate::infrastructure::process::ExternalCommand;
use crate::infrastructure::Config;

/// Produces the slug part of an entry name from its title
pub trait Slugger {
    fn slugify(&self, title: &str) -> Result<String>;
}

/// Slugger implemented in-process
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSlugger;

impl Slugger for BuiltinSlugger {
    fn slugify(&self, title: &str) -> Result<String> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(JctlError::Usage(format!(
                "Title '{}' has no characters usable in a file name",
                title
            )));
        }
        Ok(slug)
    }
}

/// Slugger delegating to an external `slugger <title>` command
#[derive(Debug, Clone)]
pub struct CommandSlugger {
    command: ExternalCommand,
}

impl CommandSlugger {
    pub fn new(command: &str) -> Self {
        CommandSlugger {
            command: ExternalCommand::new("slugger", command),
        }
    }
}

impl Slugger for CommandSlugger {
    fn slugify(&self, title: &str) -> Result<String> {
        let output = self.command.output([title])?;
        let slug = output.trim();

        if !is_valid_slug(slug) {
            return Err(JctlError::collaborator(
                self.command.tool(),
                format!("returned unusable slug {:?} for title '{}'", slug, title),
            ));
        }
        Ok(slug.to_string())
    }
}

/// Slugger selected by the configuration
pub fn slugger_for(config: &Config) -> Box<dyn Slugger> {
    match &config.slugger {
        Some(command) => Box::new(CommandSlugger::new(command)),
        None => Box::new(BuiltinSlugger),
    }
}
