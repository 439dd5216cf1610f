//! Window-manager capability used by integrated mode.

use std::sync::Arc;

use crate::command::Mode;
use crate::error::{LauncherError, LauncherResult};

pub mod memory;

pub use memory::MemoryWindowManager;

/// Window classes treated as web browsers when focusing after opening a URL.
pub const BROWSER_CLASSES: [&str; 6] = [
    "chrome",
    "chromium",
    "iron",
    "navigator",
    "firefox",
    "opera",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: u32,
    /// Window class as reported by the window manager.
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: u32,
    pub name: String,
}

/// Client, tag and view registry of a running tiling window manager.
///
/// Every operation defaults to [`LauncherError::NotImplemented`] so adapters
/// only implement what their window manager supports.
pub trait WindowManager: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    fn clients(&self) -> LauncherResult<Vec<Client>> {
        Err(LauncherError::NotImplemented)
    }
    fn find_clients_by_class(
        &self,
        matches: &dyn Fn(&str) -> bool,
    ) -> LauncherResult<Vec<Client>> {
        Ok(self
            .clients()?
            .into_iter()
            .filter(|client| matches(&client.class))
            .collect())
    }
    fn focus(&self, _client: &Client) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }

    fn find_tag(&self, _name: &str) -> LauncherResult<Option<Tag>> {
        Err(LauncherError::NotImplemented)
    }
    fn create_tag(&self, _name: &str) -> LauncherResult<Tag> {
        Err(LauncherError::NotImplemented)
    }
    fn save_tag(&self, _tag: &Tag) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }

    fn find_view(&self, _name: &str) -> LauncherResult<Option<View>> {
        Err(LauncherError::NotImplemented)
    }
    fn create_view(&self, _name: &str) -> LauncherResult<View> {
        Err(LauncherError::NotImplemented)
    }
    fn save_view(&self, _view: &View) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }
    fn tag_view(&self, _view: &View, _tags: &[Tag]) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }

    /// Start `app` as a new client. `None` when nothing was spawned.
    fn spawn_client(&self, _app: &str) -> LauncherResult<Option<Client>> {
        Err(LauncherError::NotImplemented)
    }
    fn set_client_tags(&self, _client: &Client, _tags: &[Tag]) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }
    fn set_client_flags(&self, _client: &Client, _modes: &[Mode]) -> LauncherResult<()> {
        Err(LauncherError::NotImplemented)
    }
}

pub type SharedWindowManager = Arc<dyn WindowManager>;

pub fn is_browser_class(class: &str) -> bool {
    let class = class.to_lowercase();
    BROWSER_CLASSES.iter().any(|browser| class.contains(browser))
}
