//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use crate::config::CredentialStore;
use crate::preconditions::PreconditionGate;

/// Shared paths and default collaborators.
///
/// Frontends create this once and build commands from it.
#[derive(Debug, Clone)]
pub struct AppContext {
    global_config_dir: PathBuf,
}

impl AppContext {
    /// Context rooted at the platform config directory, falling back to
    /// `<home_dir>/.config/hearth`.
    pub fn new(home_dir: &Path) -> Self {
        let global_config_dir = dirs::config_dir()
            .map(|p| p.join("hearth"))
            .unwrap_or_else(|| home_dir.join(".config").join("hearth"));

        Self::with_global_config_dir(global_config_dir)
    }

    /// Create context with custom global config directory (for testing).
    pub fn with_global_config_dir(global_config_dir: PathBuf) -> Self {
        Self { global_config_dir }
    }

    /// Context for the current user.
    pub fn with_defaults() -> Self {
        Self::new(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn global_config_dir(&self) -> &Path {
        &self.global_config_dir
    }

    /// Credentials under the global config directory, honoring `HEARTH_TOKEN`.
    pub fn credential_store(&self) -> CredentialStore {
        CredentialStore::from_config_dir(&self.global_config_dir)
    }

    /// The standard precondition chain.
    pub fn precondition_gate(&self) -> PreconditionGate {
        PreconditionGate::standard(self.credential_store())
    }
}
