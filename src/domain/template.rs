//! Templates for new entries

use crate::domain::entry::TIMESTAMP_FORMAT;
use crate::error::{JctlError, Result};
use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// Built-in template constants
const POST_TEMPLATE: &str = "---\nlayout: {LAYOUT}\ntitle: \"{TITLE}\"\ndate: {DATE}\n---\n\n";
const NOTE_TEMPLATE: &str = "---\nlayout: {LAYOUT}\ntitle: \"{TITLE}\"\ndate: {DATE}\ntags: \n---\n\n# {TITLE}\n\n";

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{(TITLE|LAYOUT|DATE|ISO_DATE)\}").unwrap())
}

/// Template for entry generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create template from built-in layout name
    pub fn from_builtin(layout: &str) -> Result<Self> {
        let content = match layout {
            "post" => POST_TEMPLATE,
            "note" => NOTE_TEMPLATE,
            _ => {
                return Err(JctlError::Usage(format!(
                    "Unknown layout: {} (built-in layouts: post, note)",
                    layout
                )))
            }
        };

        Ok(Template {
            content: content.to_string(),
        })
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            JctlError::Config(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Template { content })
    }

    /// Render template with title, layout and timestamp substitution.
    /// Substituted text is never expanded again.
    pub fn render(&self, title: &str, layout: &str, now: NaiveDateTime) -> String {
        placeholder_regex()
            .replace_all(&self.content, |caps: &Captures| match &caps[1] {
                "TITLE" => title.to_string(),
                "LAYOUT" => layout.to_string(),
                "DATE" => now.format(TIMESTAMP_FORMAT).to_string(),
                _ => now.format("%Y-%m-%d").to_string(),
            })
            .into_owned()
    }
}

/// Load `<journal>/.jctl/templates/<layout>.md` or fall back to built-in
pub fn load_template(journal_dir: &Path, layout: &str) -> Result<Template> {
    let custom_path = journal_dir
        .join(".jctl")
        .join("templates")
        .join(format!("{}.md", layout));

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Template::from_builtin(layout)
    }
}
