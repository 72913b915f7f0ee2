//! Error taxonomy for a serve invocation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Not in a hearth project directory (could not locate hearth.toml from {})",
        .searched_from.display()
    )]
    ConfigNotFound { searched_from: PathBuf },

    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Multiple hosting configs share the same target or site: {}", .keys.join(", "))]
    DuplicateHostingKey { keys: Vec<String> },

    #[error("Could not resolve project: {0}")]
    ProjectResolution(String),

    #[error("Serve failed: {0}")]
    Serve(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
