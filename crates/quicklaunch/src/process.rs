//! Process execution capability and the command lines handed to it.

use std::process::Command;
use std::sync::Arc;

use crate::config::LauncherConfig;
use crate::error::{LauncherError, LauncherResult};

const DISCARD_OUTPUT: &str = " >/dev/null 2>&1";

/// Runs command lines through a shell.
pub trait ProcessRunner: Send + Sync {
    /// Run `command_line` and wait for it. Returns the exit code, `None` when
    /// the process was killed by a signal.
    fn spawn(&self, command_line: &str) -> LauncherResult<Option<i32>>;
}

pub type SharedRunner = Arc<dyn ProcessRunner>;

#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.shell.clone())
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl ProcessRunner for ShellRunner {
    fn spawn(&self, command_line: &str) -> LauncherResult<Option<i32>> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .status()
            .map_err(|error| LauncherError::io(format!("failed to run {}", self.shell), error))?;
        if !status.success() {
            tracing::debug!("{command_line} exited with {status}");
        }
        Ok(status.code())
    }
}

/// Shell line for a plain command; output is discarded unless `debug`.
pub fn shell_line(text: &str, debug: bool) -> String {
    if debug {
        text.to_string()
    } else {
        format!("{text}{DISCARD_OUTPUT}")
    }
}

/// Shell line that hands `uri` to `opener`, single-quoted.
pub fn open_line(opener: &str, uri: &str, debug: bool) -> String {
    shell_line(&format!("{opener} {}", quote(uri)), debug)
}

/// Single-quote `value` for a POSIX shell.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
