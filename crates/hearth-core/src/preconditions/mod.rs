//! Precondition gate run before a serve session is dispatched.
//!
//! An invocation that asks for at least one emulator in `--only` is
//! purely local and skips the gate entirely. Anything else runs the
//! validation chain: config discovery, permissions, hosting-key
//! duplicates, project number. The first failing step ends the chain.

pub mod config;
pub mod hosting_keys;
pub mod permissions;
pub mod project;

use std::fmt::Debug;

use tracing::debug;

use crate::config::{CredentialStore, Credentials, LoadedConfig};
use crate::error::Result;
use crate::options::ServeOptions;
use crate::target::filter_only_emulators;

pub use config::RequireConfig;
pub use hosting_keys::{CheckDuplicateHostingKeys, duplicate_hosting_keys};
pub use permissions::RequirePermissions;
pub use project::ResolveProjectNumber;

/// One fallible step of the validation chain.
pub trait PreconditionStep: Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn run(&self, options: &ServeOptions, state: &mut ProjectState) -> Result<()>;
}

/// What the validation chain has learned so far.
#[derive(Debug, Clone, Default)]
pub struct ProjectState {
    pub config: Option<LoadedConfig>,
    pub project_id: Option<String>,
    pub project_number: Option<String>,
    /// Credentials loaded by the permissions step, reused by later steps.
    pub credentials: Option<Credentials>,
}

impl ProjectState {
    /// Project id from `--project`, else from the config.
    pub fn active_project_id(&self, options: &ServeOptions) -> Option<String> {
        if let Some(id) = &self.project_id {
            return Some(id.clone());
        }
        options
            .project
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| {
                self.config
                    .as_ref()
                    .and_then(|c| c.config().project.id.as_deref())
            })
            .map(str::to_string)
    }
}

/// Resolved project identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    pub id: String,
    pub number: Option<String>,
}

/// Result of a completed validation chain.
#[derive(Debug, Clone, Default)]
pub struct ValidatedProject {
    pub config: Option<LoadedConfig>,
    pub project: Option<ProjectIdentity>,
}

impl From<ProjectState> for ValidatedProject {
    fn from(state: ProjectState) -> Self {
        let project = state.project_id.map(|id| ProjectIdentity {
            id,
            number: state.project_number,
        });
        Self {
            config: state.config,
            project,
        }
    }
}

#[derive(Debug, Clone)]
pub enum GateOutcome {
    /// Emulator-only request; nothing was validated.
    Skipped,
    Validated(ValidatedProject),
}

impl GateOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, GateOutcome::Skipped)
    }

    pub fn config(&self) -> Option<&LoadedConfig> {
        match self {
            GateOutcome::Skipped => None,
            GateOutcome::Validated(project) => project.config.as_ref(),
        }
    }

    pub fn project(&self) -> Option<&ProjectIdentity> {
        match self {
            GateOutcome::Skipped => None,
            GateOutcome::Validated(project) => project.project.as_ref(),
        }
    }
}

#[derive(Debug)]
pub struct PreconditionGate {
    steps: Vec<Box<dyn PreconditionStep>>,
}

impl PreconditionGate {
    /// Gate running the given steps in order.
    pub fn new(steps: Vec<Box<dyn PreconditionStep>>) -> Self {
        Self { steps }
    }

    /// The standard chain: config, permissions, hosting keys, project number.
    pub fn standard(credentials: CredentialStore) -> Self {
        Self::new(vec![
            Box::new(RequireConfig),
            Box::new(RequirePermissions::new(credentials.clone())),
            Box::new(CheckDuplicateHostingKeys),
            Box::new(ResolveProjectNumber::new(credentials)),
        ])
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, options: &ServeOptions) -> Result<GateOutcome> {
        let emulators = filter_only_emulators(options.only.as_deref());
        if !emulators.is_empty() {
            debug!(?emulators, "emulator-only request, skipping preconditions");
            return Ok(GateOutcome::Skipped);
        }

        let mut state = ProjectState::default();
        for step in &self.steps {
            debug!(step = step.name(), "running precondition");
            step.run(options, &mut state)?;
        }
        Ok(GateOutcome::Validated(state.into()))
    }
}
