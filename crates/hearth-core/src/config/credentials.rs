//! Credential store for local permission checks.
//!
//! ```toml
//! token = "..."
//!
//! [projects.my-app]
//! number = "123456789"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::schema::deserialize_project_number;
use crate::error::{Error, Result};

pub const CREDENTIALS_FILE_NAME: &str = "credentials.toml";
pub const TOKEN_ENV: &str = "HEARTH_TOKEN";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Credentials {
    #[serde(default)]
    pub token: Option<String>,

    /// Projects the token grants access to, by project id
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectGrant>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectGrant {
    #[serde(default, deserialize_with = "deserialize_project_number")]
    pub number: Option<String>,
}

impl Credentials {
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn grant(&self, project_id: &str) -> Option<&ProjectGrant> {
        self.projects.get(project_id)
    }
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    token_override: Option<String>,
}

impl CredentialStore {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            path,
            token_override: None,
        }
    }

    /// Store under `global_config_dir`, honoring `HEARTH_TOKEN`.
    pub fn from_config_dir(global_config_dir: &Path) -> Self {
        Self::from_path(global_config_dir.join(CREDENTIALS_FILE_NAME))
            .with_token_override(std::env::var(TOKEN_ENV).ok())
    }

    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        self.token_override = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load credentials; a missing file yields empty credentials.
    pub fn load(&self) -> Result<Credentials> {
        let mut credentials = if self.path.exists() {
            let content =
                std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
            toml::from_str::<Credentials>(&content).map_err(|e| Error::ConfigInvalid {
                path: self.path.clone(),
                message: e.message().to_string(),
            })?
        } else {
            Credentials::default()
        };
        if let Some(token) = &self.token_override {
            credentials.token = Some(token.clone());
        }
        Ok(credentials)
    }
}
