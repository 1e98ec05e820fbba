//! Editor integration for entry files

use crate::error::Result;
use crate::infrastructure::process::ExternalCommand;
use std::path::Path;

/// Session for opening files in an external editor
pub struct EditorSession {
    command: ExternalCommand,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: &str) -> Self {
        EditorSession {
            command: ExternalCommand::new("editor", editor_command),
        }
    }

    /// Open a file and block until the editor exits.
    /// A non-zero exit status is an error.
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        self.command.run([file_path])
    }
}
