//! Keyword matching over entry names and entry text

/// Sort names most recent first; date-prefixed names sort chronologically
fn newest_first(mut names: Vec<String>) -> Vec<String> {
    names.sort_unstable_by(|a, b| b.cmp(a));
    names.dedup();
    names
}

/// True if every keyword is a literal substring of `haystack`
fn contains_all(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().all(|word| haystack.contains(word.as_str()))
}

/// Entries whose name contains every keyword (case-sensitive).
/// An empty keyword list matches every entry.
pub fn match_by_name<I>(names: I, keywords: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let matches = names
        .into_iter()
        .filter(|name| contains_all(name, keywords))
        .collect();
    newest_first(matches)
}

/// Entries whose full text contains every keyword, ignoring case
pub fn match_by_content<I, T>(entries: I, keywords: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = (String, T)>,
    T: AsRef<str>,
{
    let folded: Vec<String> = keywords.iter().map(|word| word.to_lowercase()).collect();

    let matches = entries
        .into_iter()
        .filter(|(_, text)| contains_all(&text.as_ref().to_lowercase(), &folded))
        .map(|(name, _)| name)
        .collect();
    newest_first(matches)
}
