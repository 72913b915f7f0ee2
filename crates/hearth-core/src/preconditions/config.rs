use super::{PreconditionStep, ProjectState};
use crate::config;
use crate::error::Result;
use crate::options::ServeOptions;

/// Locate and load hearth.toml.
///
/// An explicit `config_path` is resolved against the working directory
/// and must exist; otherwise the nearest hearth.toml above the working
/// directory is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireConfig;

impl PreconditionStep for RequireConfig {
    fn name(&self) -> &'static str {
        "config"
    }

    fn run(&self, options: &ServeOptions, state: &mut ProjectState) -> Result<()> {
        let cwd = options.effective_cwd();
        let loaded = match &options.config_path {
            Some(path) => config::load(&cwd.join(path))?,
            None => config::discover(&cwd)?,
        };
        state.config = Some(loaded);
        Ok(())
    }
}
