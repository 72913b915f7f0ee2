//! The serve request as parsed from the command line.

use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_FIRESTORE_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_PORT: u16 = 9000;

/// Options for a serve invocation.
///
/// Built once by the frontend and only read afterwards. Resolved targets
/// are returned separately in a [`crate::dispatch::Resolution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// Port for hosting (functions use the next port)
    pub port: u16,
    /// Host for hosting and functions
    pub host: String,
    pub firestore_host: String,
    pub firestore_port: u16,
    pub database_host: String,
    pub database_port: u16,
    /// Raw `--only` value
    pub only: Option<String>,
    /// Raw `--except` value
    pub except: Option<String>,
    /// Working directory the invocation runs from (process cwd if None)
    pub cwd: Option<PathBuf>,
    /// Explicit project id, overriding `project.id` from the config
    pub project: Option<String>,
    /// Explicit config file, skipping the upward search
    pub config_path: Option<PathBuf>,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            firestore_host: DEFAULT_HOST.to_string(),
            firestore_port: DEFAULT_FIRESTORE_PORT,
            database_host: DEFAULT_HOST.to_string(),
            database_port: DEFAULT_DATABASE_PORT,
            only: None,
            except: None,
            cwd: None,
            project: None,
            config_path: None,
        }
    }
}

impl ServeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_only(mut self, only: impl Into<String>) -> Self {
        self.only = Some(only.into());
        self
    }

    pub fn with_except(mut self, except: impl Into<String>) -> Self {
        self.except = Some(except.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Working directory for this invocation.
    ///
    /// Falls back to the process working directory, and to `.` if even
    /// that cannot be read.
    pub fn effective_cwd(&self) -> PathBuf {
        match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf()),
        }
    }
}
