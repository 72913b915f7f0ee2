use std::path::{Path, PathBuf};

use tracing::debug;

use super::parser::parse_hearth_toml;
use super::schema::ProjectConfig;
use crate::error::{Error, Result};
use crate::target::DeployTarget;

pub const CONFIG_FILE_NAME: &str = "hearth.toml";

/// A discovered hearth.toml and the project directory containing it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    project_dir: PathBuf,
    path: PathBuf,
    config: ProjectConfig,
}

impl LoadedConfig {
    pub fn new(project_dir: PathBuf, path: PathBuf, config: ProjectConfig) -> Self {
        Self {
            project_dir,
            path,
            config,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn has(&self, target: DeployTarget) -> bool {
        self.config.has(target)
    }
}

/// Find the nearest hearth.toml at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Search upward from `start` and load the first hearth.toml found.
pub fn discover(start: &Path) -> Result<LoadedConfig> {
    let path = find_config_file(start).ok_or_else(|| Error::ConfigNotFound {
        searched_from: start.to_path_buf(),
    })?;
    load(&path)
}

/// Load a specific hearth.toml; its parent directory is the project directory.
pub fn load(path: &Path) -> Result<LoadedConfig> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound {
            searched_from: path.to_path_buf(),
        });
    }
    let config = parse_hearth_toml(path)?;
    let project_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(path = %path.display(), "loaded project config");
    Ok(LoadedConfig::new(project_dir, path.to_path_buf(), config))
}
