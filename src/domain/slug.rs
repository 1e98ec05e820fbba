//! Built-in title slugging

use regex::Regex;
use std::sync::OnceLock;

/// Regex for runs of characters that cannot appear in a slug
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase ASCII alphanumerics joined by single dashes.
/// May return an empty string when the title has no usable characters.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    separator_regex()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// True if `slug` is a single non-empty line safe to use in a file name
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\n', '\r', '\0'])
}
