//! Output formatting utilities

use crate::application::EntrySummary;

/// Format entries for `jctl list`, one per line
pub fn format_entry_list(entries: &[EntrySummary]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    let mut output = String::new();
    for entry in entries {
        match &entry.title {
            Some(title) => output.push_str(&format!("{:<width$}  {}\n", entry.name, title)),
            None => output.push_str(&format!("{}\n", entry.name)),
        }
    }
    output
}

/// Format `key = value` lines for `jctl config --list`
pub fn format_config_list(values: &[(&str, String)]) -> String {
    let mut output = String::new();
    for (key, value) in values {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, title: Option<&str>) -> EntrySummary {
        EntrySummary {
            name: name.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[
            summary("2024-02-01-beta-trip", Some("Beta Trip")),
            summary("2024-01-01-alpha", Some("Alpha")),
        ]);

        assert_eq!(
            output,
            "2024-02-01-beta-trip  Beta Trip\n2024-01-01-alpha      Alpha\n"
        );
    }

    #[test]
    fn test_format_entry_without_title() {
        let output = format_entry_list(&[summary("2024-01-01-alpha", None)]);
        assert_eq!(output, "2024-01-01-alpha\n");
    }

    #[test]
    fn test_format_config_list() {
        let output = format_config_list(&[("editor", "vim".to_string()), ("slugger", String::new())]);
        assert_eq!(output, "editor = vim\nslugger = \n");
    }
}
