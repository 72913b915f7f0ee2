use super::{PreconditionStep, ProjectState};
use crate::config::CredentialStore;
use crate::error::{Error, Result};
use crate::options::ServeOptions;

/// Resolve the active project's number.
///
/// `project.number` in hearth.toml wins over the number recorded in the
/// credentials file.
#[derive(Debug, Clone)]
pub struct ResolveProjectNumber {
    credentials: CredentialStore,
}

impl ResolveProjectNumber {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

impl PreconditionStep for ResolveProjectNumber {
    fn name(&self) -> &'static str {
        "project-number"
    }

    fn run(&self, options: &ServeOptions, state: &mut ProjectState) -> Result<()> {
        let project_id = state
            .active_project_id(options)
            .ok_or_else(|| Error::ProjectResolution("no active project".to_string()))?;

        let configured = state
            .config
            .as_ref()
            .and_then(|c| c.config().project.number.clone());
        let number = match configured {
            Some(number) => number,
            None => {
                let loaded;
                let credentials = match &state.credentials {
                    Some(credentials) => credentials,
                    None => {
                        loaded = self.credentials.load()?;
                        &loaded
                    }
                };
                credentials
                    .grant(&project_id)
                    .and_then(|grant| grant.number.clone())
                    .ok_or_else(|| {
                        Error::ProjectResolution(format!(
                            "no project number recorded for '{}'",
                            project_id
                        ))
                    })?
            }
        };

        state.project_id = Some(project_id);
        state.project_number = Some(number);
        Ok(())
    }
}
