//! Runs a [`ParsedCommand`] against the process runner and, in integrated
//! mode, the window manager.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::command::{CommandParser, ParsedCommand, StructuredLaunch};
use crate::config::LauncherConfig;
use crate::error::{LauncherError, LauncherResult};
use crate::process::{self, SharedRunner};
use crate::saved::SharedRegistry;
use crate::window_manager::{is_browser_class, Client, SharedWindowManager, Tag, WindowManager};

/// Maximum chain length when a saved command refers to another one.
const MAX_REFERENCE_DEPTH: usize = 8;

pub struct CommandExecutor {
    config: LauncherConfig,
    parser: CommandParser,
    runner: SharedRunner,
    window_manager: Option<SharedWindowManager>,
    registry: Option<SharedRegistry>,
    /// Receives debug echoes; stdout unless replaced.
    echo: Mutex<Box<dyn Write + Send>>,
}

impl CommandExecutor {
    pub fn new(config: LauncherConfig, runner: SharedRunner) -> Self {
        Self {
            parser: CommandParser::from_config(&config),
            config,
            runner,
            window_manager: None,
            registry: None,
            echo: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_echo(mut self, writer: impl Write + Send + 'static) -> Self {
        self.echo = Mutex::new(Box::new(writer));
        self
    }

    pub fn with_window_manager(mut self, window_manager: SharedWindowManager) -> Self {
        self.window_manager = Some(window_manager);
        self
    }

    pub fn with_registry(mut self, registry: SharedRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// Classify `raw` and run the result.
    pub fn execute(&self, raw: &str) -> LauncherResult<bool> {
        self.run(&self.parser.classify(raw))
    }

    /// Run one command. Reports `true` once every side effect went through;
    /// runner and window-manager failures propagate.
    pub fn run(&self, command: &ParsedCommand) -> LauncherResult<bool> {
        self.run_at_depth(command, 0)
    }

    fn run_at_depth(&self, command: &ParsedCommand, depth: usize) -> LauncherResult<bool> {
        tracing::debug!(kind = command.kind(), "running command");
        match command {
            ParsedCommand::Empty => Ok(true),
            ParsedCommand::Shell { text } => {
                self.spawn(&process::shell_line(text, self.config.debug))?;
                Ok(true)
            }
            ParsedCommand::Uri { url } => {
                self.open_uri(url)?;
                Ok(true)
            }
            ParsedCommand::Launch(launch) => {
                self.launch(launch)?;
                Ok(true)
            }
            ParsedCommand::MethodRef { name } => self.run_reference(name, depth),
        }
    }

    fn integrated_window_manager(&self) -> Option<&dyn WindowManager> {
        if !self.config.integrated {
            return None;
        }
        self.window_manager.as_deref()
    }

    fn echo(&self, line: &str) {
        if !self.config.debug {
            return;
        }
        let mut out = self.echo.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::debug!("debug echo failed: {error}");
        }
    }

    fn spawn(&self, line: &str) -> LauncherResult<Option<i32>> {
        self.echo(line);
        self.runner.spawn(line)
    }

    fn open_uri(&self, url: &str) -> LauncherResult<()> {
        self.spawn(&process::open_line(&self.config.opener, url, self.config.debug))?;
        if let Some(window_manager) = self.integrated_window_manager() {
            focus_browser(window_manager);
        }
        Ok(())
    }

    fn launch(&self, launch: &StructuredLaunch) -> LauncherResult<()> {
        let window_manager = self
            .integrated_window_manager()
            .ok_or(LauncherError::WindowManagerUnavailable)?;

        self.echo(&format!("App: {}", launch.app));
        self.echo(&format!("Tags: {:?}", launch.tags));
        self.echo(&format!("Views: {:?}", launch.views));
        self.echo(&format!("Modes: {:?}", launch.modes));

        let mut tags = Vec::with_capacity(launch.tags.len());
        for name in &launch.tags {
            let tag = match window_manager.find_tag(name)? {
                Some(tag) => tag,
                None => window_manager.create_tag(name)?,
            };
            window_manager.save_tag(&tag)?;
            tags.push(tag);
        }

        for name in &launch.views {
            let view = match window_manager.find_view(name)? {
                Some(view) => view,
                None => window_manager.create_view(name)?,
            };
            window_manager.save_view(&view)?;
            if !tags.is_empty() {
                window_manager.tag_view(&view, &tags)?;
            }
        }

        let Some(client) = window_manager.spawn_client(&launch.app)? else {
            tracing::info!(app = %launch.app, "window manager spawned no client");
            return Ok(());
        };
        assign_client(window_manager, &client, &tags, launch)
    }

    fn run_reference(&self, name: &str, depth: usize) -> LauncherResult<bool> {
        let Some(registry) = self.registry.as_ref() else {
            tracing::warn!("no saved command registry, ignoring :{name}");
            return Ok(true);
        };
        if depth >= MAX_REFERENCE_DEPTH {
            return Err(LauncherError::ReferenceCycle(name.to_string()));
        }
        let saved = registry
            .resolve(name)?
            .ok_or_else(|| LauncherError::UnknownCommand(name.to_string()))?;
        let command = saved.to_parsed(&self.parser);
        self.run_at_depth(&command, depth + 1)
    }
}

fn assign_client(
    window_manager: &dyn WindowManager,
    client: &Client,
    tags: &[Tag],
    launch: &StructuredLaunch,
) -> LauncherResult<()> {
    if !tags.is_empty() {
        window_manager.set_client_tags(client, tags)?;
    }
    if !launch.modes.is_empty() {
        window_manager.set_client_flags(client, &launch.modes)?;
    }
    Ok(())
}

/// Focus the first browser window, if any. Never fails.
fn focus_browser(window_manager: &dyn WindowManager) {
    let result = window_manager
        .find_clients_by_class(&is_browser_class)
        .and_then(|clients| match clients.first() {
            Some(browser) => window_manager.focus(browser),
            None => Ok(()),
        });
    if let Err(error) = result {
        tracing::debug!("browser focus skipped: {error}");
    }
}
