//! Front matter parsing and serialization
//!
//! An entry file is `---\n`, one `key: value` line per field (blank lines
//! allowed), `---\n`, then the body. Parsing keeps every line in order so
//! that serializing an unmodified parse reproduces the input byte for byte.

use thiserror::Error;

const SEPARATOR: &str = "---";
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Reasons a front matter block cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("missing opening '---' separator")]
    MissingOpeningSeparator,

    #[error("missing closing '---' separator")]
    MissingClosingSeparator,

    #[error("line {line}: expected 'key: value', found {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("value for '{key}' must not contain a line break")]
    MultilineValue { key: String },

    #[error("date {value:?} does not start with YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// A single line of the front matter block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterLine {
    Field { key: String, value: String },
    Blank,
}

/// Ordered front matter fields, duplicates and blank lines included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    lines: Vec<FrontMatterLine>,
}

impl FrontMatter {
    pub fn new() -> Self {
        FrontMatter::default()
    }

    pub fn lines(&self) -> &[FrontMatterLine] {
        &self.lines
    }

    /// Append a field at the end of the block
    pub fn push(&mut self, key: &str, value: &str) -> Result<(), FrontMatterError> {
        check_value(key, value)?;
        self.lines.push(FrontMatterLine::Field {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    /// Append a blank line marker
    pub fn push_blank(&mut self) {
        self.lines.push(FrontMatterLine::Blank);
    }

    /// Value of the first field with the given key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            FrontMatterLine::Field { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Replace the first field with the given key, or append it
    pub fn set(&mut self, key: &str, new_value: &str) -> Result<(), FrontMatterError> {
        check_value(key, new_value)?;

        for line in &mut self.lines {
            if let FrontMatterLine::Field { key: k, value } = line {
                if k == key {
                    *value = new_value.to_string();
                    return Ok(());
                }
            }
        }

        self.push(key, new_value)
    }

    /// Iterate over `(key, value)` pairs, skipping blank markers
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            FrontMatterLine::Field { key, value } => Some((key.as_str(), value.as_str())),
            FrontMatterLine::Blank => None,
        })
    }
}

fn check_value(key: &str, value: &str) -> Result<(), FrontMatterError> {
    if value.contains('\n') {
        return Err(FrontMatterError::MultilineValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Split raw entry text into front matter and body
pub fn parse(raw: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let mut lines = raw.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.strip_suffix('\n') == Some(SEPARATOR) => {}
        _ => return Err(FrontMatterError::MissingOpeningSeparator),
    }

    let mut front_matter = FrontMatter::new();
    let mut offset = SEPARATOR.len() + 1;

    // Line numbers are 1-based and count the opening separator.
    for (index, line) in lines.enumerate() {
        offset += line.len();

        // A final line without '\n' can never be a complete front matter line.
        let Some(content) = line.strip_suffix('\n') else {
            break;
        };

        if content == SEPARATOR {
            return Ok((front_matter, &raw[offset..]));
        }

        if content.is_empty() {
            front_matter.push_blank();
            continue;
        }

        match content.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) if !key.is_empty() => {
                front_matter.lines.push(FrontMatterLine::Field {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
            _ => {
                return Err(FrontMatterError::MalformedLine {
                    line: index + 2,
                    text: content.to_string(),
                });
            }
        }
    }

    Err(FrontMatterError::MissingClosingSeparator)
}

/// Render front matter and body back into entry text
pub fn serialize(front_matter: &FrontMatter, body: &str) -> String {
    let mut output = String::with_capacity(body.len() + 64);
    output.push_str(SEPARATOR);
    output.push('\n');

    for line in &front_matter.lines {
        if let FrontMatterLine::Field { key, value } = line {
            output.push_str(key);
            output.push_str(KEY_VALUE_SEPARATOR);
            output.push_str(value);
        }
        output.push('\n');
    }

    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(body);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\nlayout: post\ntitle: \"Alpha: the start\"\n\ndate: 2024-01-01 09:30:00\ntags: a\ntags: b\n---\n\nFirst paragraph.\n---\nNot front matter.\n";

    #[test]
    fn test_parse_sample() {
        let (fm, body) = parse(SAMPLE).unwrap();

        assert_eq!(fm.get("layout"), Some("post"));
        assert_eq!(fm.get("title"), Some("\"Alpha: the start\""));
        assert_eq!(fm.get("date"), Some("2024-01-01 09:30:00"));
        assert_eq!(fm.get("missing"), None);
        assert_eq!(fm.lines().len(), 6);
        assert_eq!(fm.lines()[2], FrontMatterLine::Blank);
        assert_eq!(body, "\nFirst paragraph.\n---\nNot front matter.\n");
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let (fm, body) = parse(SAMPLE).unwrap();
        assert_eq!(serialize(&fm, body), SAMPLE);
    }

    #[test]
    fn test_round_trip_from_constructed() {
        let mut fm = FrontMatter::new();
        fm.push("title", "Beta").unwrap();
        fm.push_blank();
        fm.push("note", "a: b: c").unwrap();
        let body = "body without trailing newline";

        let text = serialize(&fm, body);
        let (parsed, parsed_body) = parse(&text).unwrap();
        assert_eq!(parsed, fm);
        assert_eq!(parsed_body, body);
    }

    #[test]
    fn test_duplicate_keys_preserved_and_get_returns_first() {
        let (fm, _) = parse(SAMPLE).unwrap();
        assert_eq!(fm.get("tags"), Some("a"));
        let tags: Vec<_> = fm.fields().filter(|(k, _)| *k == "tags").collect();
        assert_eq!(tags, vec![("tags", "a"), ("tags", "b")]);
    }

    #[test]
    fn test_value_split_on_first_separator_only() {
        let (fm, _) = parse("---\nurl: see: here\n---\n").unwrap();
        assert_eq!(fm.get("url"), Some("see: here"));
    }

    #[test]
    fn test_empty_front_matter_and_body() {
        let (fm, body) = parse("---\n---\n").unwrap();
        assert!(fm.lines().is_empty());
        assert_eq!(body, "");
        assert_eq!(serialize(&fm, body), "---\n---\n");
    }

    #[test]
    fn test_missing_opening_separator() {
        assert_eq!(
            parse("title: x\n---\n").unwrap_err(),
            FrontMatterError::MissingOpeningSeparator
        );
        assert_eq!(
            parse("").unwrap_err(),
            FrontMatterError::MissingOpeningSeparator
        );
        assert_eq!(
            parse("----\n---\n").unwrap_err(),
            FrontMatterError::MissingOpeningSeparator
        );
    }

    #[test]
    fn test_missing_closing_separator() {
        assert_eq!(
            parse("---\ntitle: x\n").unwrap_err(),
            FrontMatterError::MissingClosingSeparator
        );
        // Closing separator without its newline is not a complete block
        assert_eq!(
            parse("---\ntitle: x\n---").unwrap_err(),
            FrontMatterError::MissingClosingSeparator
        );
    }

    #[test]
    fn test_line_without_separator_is_corrupt() {
        let err = parse("---\ntitle: x\ntags:\n---\n").unwrap_err();
        assert_eq!(
            err,
            FrontMatterError::MalformedLine {
                line: 3,
                text: "tags:".to_string()
            }
        );
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_empty_key_is_corrupt() {
        let err = parse("---\n: orphan\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_set_replaces_first_only() {
        let (mut fm, body) = parse(SAMPLE).unwrap();
        fm.set("tags", "z").unwrap();

        let text = serialize(&fm, body);
        assert!(text.contains("tags: z\ntags: b\n"));
    }

    #[test]
    fn test_set_appends_missing_key() {
        let mut fm = FrontMatter::new();
        fm.push("title", "x").unwrap();
        fm.set("date", "2024-01-01 00:00:00").unwrap();

        assert_eq!(
            serialize(&fm, ""),
            "---\ntitle: x\ndate: 2024-01-01 00:00:00\n---\n"
        );
    }

    #[test]
    fn test_set_rejects_multiline_value() {
        let mut fm = FrontMatter::new();
        let err = fm.set("title", "one\ntwo").unwrap_err();
        assert_eq!(
            err,
            FrontMatterError::MultilineValue {
                key: "title".to_string()
            }
        );
        assert!(fm.lines().is_empty());
    }

    #[test]
    fn test_crlf_lines_are_not_separators() {
        assert_eq!(
            parse("---\r\ntitle: x\r\n---\r\n").unwrap_err(),
            FrontMatterError::MissingOpeningSeparator
        );
    }
}
