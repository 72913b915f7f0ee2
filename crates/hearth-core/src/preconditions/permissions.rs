use super::{PreconditionStep, ProjectState};
use crate::config::{CREDENTIALS_FILE_NAME, CredentialStore, TOKEN_ENV};
use crate::error::{Error, Result};
use crate::options::ServeOptions;

/// Check that local credentials grant access to the active project.
#[derive(Debug, Clone)]
pub struct RequirePermissions {
    credentials: CredentialStore,
}

impl RequirePermissions {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

impl PreconditionStep for RequirePermissions {
    fn name(&self) -> &'static str {
        "permissions"
    }

    fn run(&self, options: &ServeOptions, state: &mut ProjectState) -> Result<()> {
        let project_id = state.active_project_id(options).ok_or_else(|| {
            Error::PermissionDenied(
                "no active project; set project.id in hearth.toml or pass --project".to_string(),
            )
        })?;

        let credentials = self.credentials.load()?;
        if !credentials.has_token() {
            return Err(Error::PermissionDenied(format!(
                "no credentials found; set {} or add a token to {}",
                TOKEN_ENV,
                self.credentials.path().display()
            )));
        }
        if credentials.grant(&project_id).is_none() {
            return Err(Error::PermissionDenied(format!(
                "credentials do not grant access to project '{}' (see [projects] in {})",
                project_id, CREDENTIALS_FILE_NAME
            )));
        }

        state.project_id = Some(project_id);
        state.credentials = Some(credentials);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn granted_project_keeps_loaded_credentials() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CREDENTIALS_FILE_NAME);
        std::fs::write(&path, "token = \"t\"\n[projects.my-app]\nnumber = 3\n").unwrap();
        let step = RequirePermissions::new(CredentialStore::from_path(path));
        let mut state = ProjectState::default();

        step.run(&ServeOptions::new().with_project("my-app"), &mut state)
            .unwrap();

        assert_eq!(state.project_id.as_deref(), Some("my-app"));
        let credentials = state.credentials.expect("credentials cached");
        assert!(credentials.grant("my-app").is_some());
    }
}
