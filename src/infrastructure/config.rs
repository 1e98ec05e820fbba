//! Configuration management

use crate::error::{JctlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the journal directory
pub const JOURNAL_DIR_ENV: &str = "JCTL_DIR";

const DEFAULT_EDITOR: &str = "vi";

/// Settings for one journal, read from `<journal>/.jctl/config.toml`.
///
/// Built once at startup and handed to every service; nothing below the
/// CLI layer reads the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Journal directory; never stored in the file
    #[serde(skip)]
    pub journal_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Entry file extension without the leading dot
    pub extension: String,

    /// Layout used by `new` when none is given
    pub layout: String,

    /// External slug command; the built-in slugger is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slugger: Option<String>,

    /// External templater command; built-in templates are used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templater: Option<String>,

    /// Directory for scratch copies; the system temp dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,

    pub scratch_prefix: String,

    /// Rename entries to match title and date when refreshing timestamps
    pub rename_on_touch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: PathBuf::new(),
            editor: None,
            extension: "md".to_string(),
            layout: "post".to_string(),
            slugger: None,
            templater: None,
            scratch_dir: None,
            scratch_prefix: "jctl-".to_string(),
            rename_on_touch: false,
        }
    }
}

impl Config {
    /// Resolve the journal directory and editor from the environment,
    /// then load the journal's config file
    pub fn from_env() -> Result<Self> {
        let journal_dir = match std::env::var_os(JOURNAL_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join("journal"))
                .ok_or_else(|| {
                    JctlError::Config(format!(
                        "Neither {} nor HOME is set; cannot locate the journal",
                        JOURNAL_DIR_ENV
                    ))
                })?,
        };

        let mut config = Self::load_from_dir(&journal_dir)?;

        let editor = editor_from_env(std::env::var("EDITOR").ok(), std::env::var("VISUAL").ok());
        if editor.is_some() {
            config.editor = editor;
        }

        Ok(config)
    }

    /// Load config from .jctl/config.toml in the given journal directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(JctlError::JournalNotFound(path.to_path_buf()));
        }

        let config_path = Self::config_path(path);
        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| {
                JctlError::Config(format!("Failed to parse {}: {}", config_path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(JctlError::Io(e)),
        };

        config.journal_dir = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Save config to .jctl/config.toml in the journal directory
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_path(&self.journal_dir);
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn config_path(journal_dir: &Path) -> PathBuf {
        journal_dir.join(".jctl").join("config.toml")
    }

    /// Editor command to launch
    pub fn editor_command(&self) -> &str {
        self.editor.as_deref().unwrap_or(DEFAULT_EDITOR)
    }

    /// Directory that holds scratch copies during an edit
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    fn validate(&self) -> Result<()> {
        if self.extension.is_empty()
            || self.extension.starts_with('.')
            || self.extension.contains(['/', '\\'])
        {
            return Err(JctlError::Config(format!(
                "Invalid extension '{}': expected something like 'md'",
                self.extension
            )));
        }

        if self.scratch_prefix.contains(['/', '\\']) {
            return Err(JctlError::Config(format!(
                "Invalid scratch_prefix '{}': must not contain path separators",
                self.scratch_prefix
            )));
        }

        Ok(())
    }
}

/// First non-blank of `EDITOR` and `VISUAL`
fn editor_from_env(editor: Option<String>, visual: Option<String>) -> Option<String> {
    let set = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    set(editor).or_else(|| set(visual))
}
