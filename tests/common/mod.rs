#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const ALPHA: &str = "---\nlayout: post\ntitle: \"Alpha\"\ndate: 2024-01-01 09:00:00\n---\n\nPlanted the garden.\n";
pub const BETA: &str = "---\nlayout: post\ntitle: \"Beta\"\ndate: 2024-02-01 18:30:00\n---\n\nGarden party.\n";

/// jctl pointed at `journal`, with a clean environment and a no-op editor
pub fn jctl_cmd(journal: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jctl").unwrap();
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd.env("JCTL_DIR", journal);
    cmd.env("EDITOR", "true");
    cmd
}

/// A journal holding the alpha and beta entries
pub fn journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2024-01-01-alpha.md"), ALPHA).unwrap();
    fs::write(temp.path().join("2024-02-01-beta.md"), BETA).unwrap();
    temp
}

/// Write a shell script editor and return the EDITOR value running it
pub fn editor_script(dir: &Path, body: &str) -> String {
    let path = dir.join("editor.sh");
    fs::write(&path, body).unwrap();
    format!("sh {}", path.display())
}

pub fn read(journal: &Path, name: &str) -> String {
    fs::read_to_string(journal.join(format!("{}.md", name))).unwrap()
}
