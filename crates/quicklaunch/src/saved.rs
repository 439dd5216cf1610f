//! Saved commands: the six persisted fields, stores, and name resolution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::command::{CommandParser, Mode, ParsedCommand, StructuredLaunch};
use crate::error::LauncherResult;

pub mod file;
pub mod memory;

pub use file::FileCommandStore;
pub use memory::MemoryCommandStore;

/// Persisted form of a named command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedCommand {
    pub name: String,
    /// Raw text, or the resolved shell line / URL.
    pub command: String,
    pub tags: Vec<String>,
    pub views: Vec<String>,
    pub app: String,
    pub modes: Vec<Mode>,
}

impl SavedCommand {
    /// Classify `raw` and record the result under `name`.
    pub fn from_raw(name: impl Into<String>, raw: &str, parser: &CommandParser) -> Self {
        Self::from_parsed(name, raw, &parser.classify(raw))
    }

    pub fn from_parsed(name: impl Into<String>, raw: &str, parsed: &ParsedCommand) -> Self {
        let mut saved = SavedCommand {
            name: name.into(),
            command: parsed.command_line(raw),
            ..SavedCommand::default()
        };
        if let ParsedCommand::Launch(launch) = parsed {
            saved.tags = launch.tags.clone();
            saved.views = launch.views.clone();
            saved.app = launch.app.clone();
            saved.modes = launch.modes.clone();
        }
        saved
    }

    /// Rebuild the command. Stored structured fields are used as-is so a
    /// generated placeholder tag survives; otherwise `command` is classified
    /// again.
    pub fn to_parsed(&self, parser: &CommandParser) -> ParsedCommand {
        let launch = StructuredLaunch {
            app: self.app.clone(),
            tags: self.tags.clone(),
            views: self.views.clone(),
            modes: self.modes.clone(),
        };
        if launch.is_empty() {
            return parser.classify(&self.command);
        }
        ParsedCommand::Launch(launch)
    }
}

/// Persistence for saved commands.
pub trait CommandStore: Send + Sync {
    fn save(&self, command: &SavedCommand) -> LauncherResult<()>;
    fn load(&self, name: &str) -> LauncherResult<Option<SavedCommand>>;
    /// Names of all saved commands, sorted.
    fn list(&self) -> LauncherResult<Vec<String>>;
    /// Returns whether a command was removed.
    fn remove(&self, name: &str) -> LauncherResult<bool>;
}

/// Resolves `:name` references.
pub trait CommandRegistry: Send + Sync {
    fn resolve(&self, name: &str) -> LauncherResult<Option<SavedCommand>>;
}

pub type SharedRegistry = Arc<dyn CommandRegistry>;

impl<S: CommandStore + ?Sized> CommandRegistry for S {
    fn resolve(&self, name: &str) -> LauncherResult<Option<SavedCommand>> {
        self.load(name)
    }
}
