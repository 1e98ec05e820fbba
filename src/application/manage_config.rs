//! Config management use case

use crate::error::{JctlError, Result};
use crate::infrastructure::Config;
use std::path::{Path, PathBuf};

/// Keys accepted by `jctl config`
pub const CONFIG_KEYS: &[&str] = &[
    "editor",
    "extension",
    "layout",
    "slugger",
    "templater",
    "scratch_dir",
    "scratch_prefix",
    "rename_on_touch",
];

/// Service for reading and writing `<journal>/.jctl/config.toml`
pub struct ConfigService {
    journal_dir: PathBuf,
}

impl ConfigService {
    pub fn new(journal_dir: &Path) -> Self {
        ConfigService {
            journal_dir: journal_dir.to_path_buf(),
        }
    }

    /// Get a single config value; unset optional keys read as empty
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.journal_dir)?;
        value_of(&config, key)
    }

    /// Set a config value. An empty value unsets an optional key.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.journal_dir)?;
        let optional = |v: &str| (!v.trim().is_empty()).then(|| v.to_string());

        match key {
            "editor" => config.editor = optional(value),
            "extension" => config.extension = value.trim_start_matches('.').to_string(),
            "layout" => {
                if value.trim().is_empty() {
                    return Err(JctlError::Config("layout must not be empty".to_string()));
                }
                config.layout = value.to_string();
            }
            "slugger" => config.slugger = optional(value),
            "templater" => config.templater = optional(value),
            "scratch_dir" => config.scratch_dir = optional(value).map(PathBuf::from),
            "scratch_prefix" => config.scratch_prefix = value.to_string(),
            "rename_on_touch" => {
                config.rename_on_touch = value.parse().map_err(|_| {
                    JctlError::Config(format!(
                        "Invalid value '{}' for rename_on_touch: expected true or false",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.save()
    }

    /// All keys with their current values
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = Config::load_from_dir(&self.journal_dir)?;
        CONFIG_KEYS
            .iter()
            .map(|key| Ok((*key, value_of(&config, key)?)))
            .collect()
    }
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "editor" => config.editor.clone().unwrap_or_default(),
        "extension" => config.extension.clone(),
        "layout" => config.layout.clone(),
        "slugger" => config.slugger.clone().unwrap_or_default(),
        "templater" => config.templater.clone().unwrap_or_default(),
        "scratch_dir" => config
            .scratch_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        "scratch_prefix" => config.scratch_prefix.clone(),
        "rename_on_touch" => config.rename_on_touch.to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

fn unknown_key(key: &str) -> JctlError {
    JctlError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
