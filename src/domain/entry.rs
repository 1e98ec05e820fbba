//! Journal entry model

use crate::domain::front_matter::{self, FrontMatter, FrontMatterError};
use crate::error::{JctlError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Front matter key holding the entry title
pub const TITLE_KEY: &str = "title";
/// Front matter key holding the entry timestamp
pub const DATE_KEY: &str = "date";
/// Format of the `date` front matter value
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Regex for an optionally double-quoted title value
fn quoted_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"^"(.*)"$"#).unwrap())
}

/// A parsed entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Entry {
    /// Parse entry text read from the file belonging to `name`
    pub fn parse(name: &str, raw: &str) -> Result<Self> {
        let (front_matter, body) =
            front_matter::parse(raw).map_err(|source| corrupt(name, source))?;

        Ok(Entry {
            name: name.to_string(),
            front_matter,
            body: body.to_string(),
        })
    }

    /// Serialize back to file content
    pub fn to_text(&self) -> String {
        front_matter::serialize(&self.front_matter, &self.body)
    }

    /// Title with surrounding double quotes removed
    pub fn title(&self) -> Option<&str> {
        let raw = self.front_matter.get(TITLE_KEY)?;
        Some(
            quoted_regex()
                .captures(raw)
                .and_then(|cap| cap.get(1))
                .map_or(raw, |m| m.as_str()),
        )
    }

    /// Value of a key that must be present
    pub fn require(&self, key: &str) -> Result<&str> {
        self.front_matter
            .get(key)
            .ok_or_else(|| JctlError::MissingMetadata {
                name: self.name.clone(),
                key: key.to_string(),
            })
    }

    /// Replace the `date` value with the given local time
    pub fn set_timestamp(&mut self, now: NaiveDateTime) -> Result<()> {
        self.require(DATE_KEY)?;
        let value = now.format(TIMESTAMP_FORMAT).to_string();
        self.front_matter
            .set(DATE_KEY, &value)
            .map_err(|source| corrupt(&self.name, source))
    }

    /// Calendar day of the `date` value
    pub fn date(&self) -> Result<NaiveDate> {
        let raw = self.require(DATE_KEY)?;
        raw.get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
            .ok_or_else(|| {
                corrupt(
                    &self.name,
                    FrontMatterError::InvalidDate {
                        value: raw.to_string(),
                    },
                )
            })
    }
}

fn corrupt(name: &str, source: FrontMatterError) -> JctlError {
    JctlError::CorruptEntry {
        name: name.to_string(),
        source,
    }
}

/// Canonical entry name for a date and slug (e.g. `2024-03-01-my-title`)
pub fn entry_name(date: NaiveDate, slug: &str) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "---\nlayout: post\ntitle: \"Alpha day\"\ndate: 2024-01-01 09:30:00\n---\nBody\n";

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_and_round_trip() {
        let entry = Entry::parse("2024-01-01-alpha-day", TEXT).unwrap();
        assert_eq!(entry.name, "2024-01-01-alpha-day");
        assert_eq!(entry.body, "Body\n");
        assert_eq!(entry.to_text(), TEXT);
    }

    #[test]
    fn test_parse_corrupt_names_entry() {
        let err = Entry::parse("broken", "no front matter").unwrap_err();
        match err {
            JctlError::CorruptEntry { name, source } => {
                assert_eq!(name, "broken");
                assert_eq!(source, FrontMatterError::MissingOpeningSeparator);
            }
            other => panic!("Expected CorruptEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_title_strips_quotes() {
        let entry = Entry::parse("x", TEXT).unwrap();
        assert_eq!(entry.title(), Some("Alpha day"));

        let plain = Entry::parse("x", "---\ntitle: Plain \"quoted\" word\n---\n").unwrap();
        assert_eq!(plain.title(), Some("Plain \"quoted\" word"));
    }

    #[test]
    fn test_set_timestamp_only_changes_date() {
        let mut entry = Entry::parse("x", TEXT).unwrap();
        entry.set_timestamp(at(2024, 5, 6, 7, 8, 9)).unwrap();

        assert_eq!(
            entry.to_text(),
            "---\nlayout: post\ntitle: \"Alpha day\"\ndate: 2024-05-06 07:08:09\n---\nBody\n"
        );
    }

    #[test]
    fn test_set_timestamp_requires_date() {
        let mut entry = Entry::parse("x", "---\ntitle: t\n---\n").unwrap();
        let err = entry.set_timestamp(at(2024, 5, 6, 7, 8, 9)).unwrap_err();
        assert!(matches!(err, JctlError::MissingMetadata { ref key, .. } if key == "date"));
    }

    #[test]
    fn test_date_parses_day_prefix() {
        let entry = Entry::parse("x", TEXT).unwrap();
        assert_eq!(entry.date().unwrap(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_date_garbage_is_corrupt() {
        let entry = Entry::parse("x", "---\ndate: yesterday\n---\n").unwrap();
        assert!(matches!(entry.date(), Err(JctlError::CorruptEntry { .. })));
    }

    #[test]
    fn test_entry_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(entry_name(date, "my-title"), "2024-03-01-my-title");
    }
}
