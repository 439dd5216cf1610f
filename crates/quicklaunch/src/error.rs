use thiserror::Error;

/// Unified error type for the launcher crate.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The collaborator does not provide this capability.
    #[error("not implemented")]
    NotImplemented,
    /// Invalid input provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A structured launch was requested without a window manager attached.
    #[error("window manager unavailable")]
    WindowManagerUnavailable,
    #[error("unknown saved command: {0}")]
    UnknownCommand(String),
    #[error("saved command reference cycle at {0}")]
    ReferenceCycle(String),
}

impl LauncherError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        LauncherError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias using [`LauncherError`].
pub type LauncherResult<T> = Result<T, LauncherError>;
