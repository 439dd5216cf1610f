use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LauncherError, LauncherResult};

pub const CONFIG_FILENAME: &str = "launcher.json";

/// Options shared by the parser and the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Echo command lines before running them and keep their output.
    pub debug: bool,
    /// Parse the structured launch syntax and talk to the window manager.
    pub integrated: bool,
    /// Shell used for `-c <command line>`.
    pub shell: String,
    /// Tool that opens URLs with the default handler.
    pub opener: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            debug: false,
            integrated: false,
            shell: "sh".to_string(),
            opener: "xdg-open".to_string(),
        }
    }
}

pub fn load_or_create_config(dir: &Path) -> LauncherResult<LauncherConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        LauncherError::io(
            format!("failed to create config directory {}", dir.display()),
            error,
        )
    })?;

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        let config = LauncherConfig::default();
        write_config(&path, &config)?;
        return Ok(config);
    }
    load_config(&path)
}

pub fn load_config(path: &Path) -> LauncherResult<LauncherConfig> {
    let data = std::fs::read_to_string(path).map_err(|error| {
        LauncherError::io(format!("failed to read config {}", path.display()), error)
    })?;
    serde_json::from_str(&data).map_err(|error| {
        LauncherError::InvalidInput(format!(
            "failed to parse config {}: {error}",
            path.display()
        ))
    })
}

pub fn write_config(path: &Path, config: &LauncherConfig) -> LauncherResult<()> {
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data).map_err(|error| {
        LauncherError::io(format!("failed to write config {}", path.display()), error)
    })
}
