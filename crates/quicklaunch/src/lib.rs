//! Classify a free-form launcher line and run it: open a URL, search the
//! web, run a shell line, or hand a structured launch to a tiling window
//! manager.

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod process;
pub mod saved;
pub mod window_manager;

pub use crate::command::{classify, CommandParser, Mode, ParsedCommand, StructuredLaunch};
pub use crate::config::LauncherConfig;
pub use crate::error::{LauncherError, LauncherResult};
pub use crate::executor::CommandExecutor;
pub use crate::process::{ProcessRunner, SharedRunner, ShellRunner};
pub use crate::saved::{CommandRegistry, CommandStore, SavedCommand};
pub use crate::window_manager::{SharedWindowManager, WindowManager};
