//! In-memory window manager that records every call.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Client, Tag, View, WindowManager};
use crate::command::Mode;
use crate::error::LauncherResult;

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    clients: Vec<Client>,
    tags: Vec<Tag>,
    views: Vec<View>,
    saved: Vec<String>,
    view_tags: HashMap<String, Vec<String>>,
    client_tags: HashMap<u32, Vec<String>>,
    client_flags: HashMap<u32, Vec<Mode>>,
    focused: Option<u32>,
    refuse_spawn: bool,
    calls: Vec<String>,
}

impl State {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Window manager kept entirely in memory, for hosts without a real one and
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryWindowManager {
    state: Mutex<State>,
}

impl MemoryWindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an already running client.
    pub fn add_client(&self, class: &str) -> Client {
        let mut state = self.state();
        let client = Client {
            id: state.next_id(),
            class: class.to_string(),
        };
        state.clients.push(client.clone());
        client
    }

    /// Make `spawn_client` report that nothing was started.
    pub fn refuse_spawn(&self, refuse: bool) {
        self.state().refuse_spawn = refuse;
    }

    /// Calls in the order they were made, e.g. `create_tag work`.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn focused(&self) -> Option<u32> {
        self.state().focused
    }

    /// Names of saved tags and views, in save order.
    pub fn saved(&self) -> Vec<String> {
        self.state().saved.clone()
    }

    pub fn view_tags(&self, view: &str) -> Vec<String> {
        self.state().view_tags.get(view).cloned().unwrap_or_default()
    }

    pub fn client_tags(&self, client: u32) -> Vec<String> {
        self.state().client_tags.get(&client).cloned().unwrap_or_default()
    }

    pub fn client_flags(&self, client: u32) -> Vec<Mode> {
        self.state().client_flags.get(&client).cloned().unwrap_or_default()
    }
}

fn names(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(|tag| tag.name.clone()).collect()
}

impl WindowManager for MemoryWindowManager {
    fn id(&self) -> &str {
        "memory"
    }

    fn clients(&self) -> LauncherResult<Vec<Client>> {
        Ok(self.state().clients.clone())
    }

    fn focus(&self, client: &Client) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("focus {}", client.id));
        state.focused = Some(client.id);
        Ok(())
    }

    fn find_tag(&self, name: &str) -> LauncherResult<Option<Tag>> {
        let mut state = self.state();
        state.calls.push(format!("find_tag {name}"));
        Ok(state.tags.iter().find(|tag| tag.name == name).cloned())
    }

    fn create_tag(&self, name: &str) -> LauncherResult<Tag> {
        let mut state = self.state();
        state.calls.push(format!("create_tag {name}"));
        let tag = Tag {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.tags.push(tag.clone());
        Ok(tag)
    }

    fn save_tag(&self, tag: &Tag) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("save_tag {}", tag.name));
        state.saved.push(format!("#{}", tag.name));
        Ok(())
    }

    fn find_view(&self, name: &str) -> LauncherResult<Option<View>> {
        let mut state = self.state();
        state.calls.push(format!("find_view {name}"));
        Ok(state.views.iter().find(|view| view.name == name).cloned())
    }

    fn create_view(&self, name: &str) -> LauncherResult<View> {
        let mut state = self.state();
        state.calls.push(format!("create_view {name}"));
        let view = View {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.views.push(view.clone());
        Ok(view)
    }

    fn save_view(&self, view: &View) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("save_view {}", view.name));
        state.saved.push(format!("@{}", view.name));
        Ok(())
    }

    fn tag_view(&self, view: &View, tags: &[Tag]) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("tag_view {}", view.name));
        state.view_tags.insert(view.name.clone(), names(tags));
        Ok(())
    }

    fn spawn_client(&self, app: &str) -> LauncherResult<Option<Client>> {
        let mut state = self.state();
        state.calls.push(format!("spawn_client {app}"));
        if state.refuse_spawn {
            return Ok(None);
        }
        let client = Client {
            id: state.next_id(),
            class: app.split_whitespace().next().unwrap_or(app).to_string(),
        };
        state.clients.push(client.clone());
        Ok(Some(client))
    }

    fn set_client_tags(&self, client: &Client, tags: &[Tag]) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("set_client_tags {}", client.id));
        state.client_tags.insert(client.id, names(tags));
        Ok(())
    }

    fn set_client_flags(&self, client: &Client, modes: &[Mode]) -> LauncherResult<()> {
        let mut state = self.state();
        state.calls.push(format!("set_client_flags {}", client.id));
        state.client_flags.insert(client.id, modes.to_vec());
        Ok(())
    }
}
