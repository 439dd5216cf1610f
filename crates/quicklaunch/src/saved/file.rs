use std::path::PathBuf;

use super::{CommandStore, SavedCommand};
use crate::error::{LauncherError, LauncherResult};

const EXTENSION: &str = "json";

/// One pretty-printed JSON file per saved command.
#[derive(Debug, Clone)]
pub struct FileCommandStore {
    root: PathBuf,
}

impl FileCommandStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn build_path(&self, name: &str) -> LauncherResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.{EXTENSION}")))
    }
}

impl CommandStore for FileCommandStore {
    fn save(&self, command: &SavedCommand) -> LauncherResult<()> {
        let path = self.build_path(&command.name)?;
        std::fs::create_dir_all(&self.root).map_err(|error| {
            LauncherError::io(
                format!("failed to create command directory {}", self.root.display()),
                error,
            )
        })?;
        let serialized = serde_json::to_vec_pretty(command)?;
        std::fs::write(&path, serialized).map_err(|error| {
            LauncherError::io(format!("failed to write command file {}", path.display()), error)
        })
    }

    fn load(&self, name: &str) -> LauncherResult<Option<SavedCommand>> {
        let path = self.build_path(name)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(LauncherError::io(
                    format!("failed to read command file {}", path.display()),
                    error,
                ))
            }
        };
        let command = serde_json::from_slice(&bytes)?;
        Ok(Some(command))
    }

    fn list(&self) -> LauncherResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(LauncherError::io(
                    format!("failed to list {}", self.root.display()),
                    error,
                ))
            }
        };
        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|error| LauncherError::io("failed to read directory entry", error))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn remove(&self, name: &str) -> LauncherResult<bool> {
        let path = self.build_path(name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(LauncherError::io(
                format!("failed to remove command file {}", path.display()),
                error,
            )),
        }
    }
}

fn validate_name(name: &str) -> LauncherResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(&['/', '\\'][..]) {
        return Err(LauncherError::InvalidInput(format!(
            "invalid command name {name:?}"
        )));
    }
    Ok(())
}
