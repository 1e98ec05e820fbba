//! Invoking external collaborator commands (editor, slugger, templater)

use crate::error::{JctlError, Result};
use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// A configured command line such as `code -w`, run with extra arguments
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    tool: &'static str,
    command: String,
}

impl ExternalCommand {
    /// `tool` names the collaborator in error messages
    pub fn new(tool: &'static str, command: &str) -> Self {
        ExternalCommand {
            tool,
            command: command.to_string(),
        }
    }

    pub fn tool(&self) -> &'static str {
        self.tool
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            JctlError::collaborator(self.tool, "no command configured")
        })?;
        Ok((program, parts.collect()))
    }

    fn build<I, S>(&self, extra: I) -> Result<(String, Command)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (program, args) = self.parse_command()?;

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = Command::new(&program);

        cmd.args(&args).args(extra);
        Ok((program, cmd))
    }

    fn check(&self, program: &str, status: ExitStatus) -> Result<()> {
        if status.success() {
            return Ok(());
        }
        let reason = match status.code() {
            Some(code) => format!("'{}' exited with status {}", program, code),
            None => format!("'{}' was terminated by a signal", program),
        };
        Err(JctlError::collaborator(self.tool, reason))
    }

    /// Run attached to the terminal and wait for it to exit
    pub fn run<I, S>(&self, extra: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (program, mut cmd) = self.build(extra)?;
        debug!(tool = self.tool, command = ?cmd, "running collaborator");

        let status = cmd.status().map_err(|e| {
            JctlError::collaborator(self.tool, format!("failed to launch '{}': {}", program, e))
        })?;
        self.check(&program, status)
    }

    /// Run and capture standard output
    pub fn output<I, S>(&self, extra: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (program, mut cmd) = self.build(extra)?;
        debug!(tool = self.tool, command = ?cmd, "running collaborator");

        let output = cmd
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                JctlError::collaborator(
                    self.tool,
                    format!("failed to launch '{}': {}", program, e),
                )
            })?;
        self.check(&program, output.status)?;

        String::from_utf8(output.stdout).map_err(|_| {
            JctlError::collaborator(self.tool, format!("'{}' printed invalid UTF-8", program))
        })
    }
}
