use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CommandStore, SavedCommand};
use crate::error::LauncherResult;

#[derive(Debug, Default)]
pub struct MemoryCommandStore {
    commands: Mutex<BTreeMap<String, SavedCommand>>,
}

impl MemoryCommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn commands(&self) -> MutexGuard<'_, BTreeMap<String, SavedCommand>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandStore for MemoryCommandStore {
    fn save(&self, command: &SavedCommand) -> LauncherResult<()> {
        self.commands()
            .insert(command.name.clone(), command.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> LauncherResult<Option<SavedCommand>> {
        Ok(self.commands().get(name).cloned())
    }

    fn list(&self) -> LauncherResult<Vec<String>> {
        Ok(self.commands().keys().cloned().collect())
    }

    fn remove(&self, name: &str) -> LauncherResult<bool> {
        Ok(self.commands().remove(name).is_some())
    }
}
