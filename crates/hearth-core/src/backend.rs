//! Hand-off to the serve backend.
//!
//! The backend receives a [`ServeSession`] describing what to start.
//! [`ServePlan`] turns a session into concrete listeners (address and
//! content root per subsystem) for backends that need them.

use std::fmt::{self, Debug};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::LoadedConfig;
use crate::dispatch::ServeTargets;
use crate::error::{Error, Result};
use crate::options::ServeOptions;
use crate::preconditions::ProjectIdentity;
use crate::target::{DeployTarget, Emulator};

/// Everything the backend needs to start a session.
#[derive(Debug, Clone, Copy)]
pub struct ServeSession<'a> {
    pub options: &'a ServeOptions,
    pub targets: &'a ServeTargets,
    pub config: Option<&'a LoadedConfig>,
    pub project: Option<&'a ProjectIdentity>,
}

impl ServeSession<'_> {
    /// Project directory if a config was found, else the working directory.
    pub fn root_dir(&self) -> PathBuf {
        match self.config {
            Some(loaded) => loaded.project_dir().to_path_buf(),
            None => self.options.effective_cwd(),
        }
    }
}

/// The long-running serve backend.
pub trait ServeBackend: Debug {
    fn serve(&self, session: &ServeSession<'_>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Subsystem {
    Emulator(Emulator),
    Deploy(DeployTarget),
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subsystem::Emulator(emulator) => write!(f, "{emulator}"),
            Subsystem::Deploy(target) => write!(f, "{target}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listener {
    pub subsystem: Subsystem,
    pub host: String,
    pub port: u16,
    /// Directory served (hosting) or loaded (functions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Listener {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServePlan {
    pub emulators_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub listeners: Vec<Listener>,
}

impl ServePlan {
    /// Work out which address each requested subsystem binds.
    ///
    /// Functions bind the port after hosting. A session with no targets
    /// has nothing to serve and is rejected.
    pub fn build(session: &ServeSession<'_>) -> Result<Self> {
        let options = session.options;
        let listeners = match session.targets {
            ServeTargets::Emulators(emulators) => emulators
                .iter()
                .map(|emulator| emulator_listener(options, *emulator))
                .collect(),
            ServeTargets::Deploy(targets) => {
                if targets.is_empty() {
                    return Err(Error::Serve(
                        "nothing to serve; check --only/--except and the targets declared in hearth.toml"
                            .to_string(),
                    ));
                }
                targets
                    .iter()
                    .map(|target| deploy_listener(session, *target))
                    .collect::<Result<Vec<_>>>()?
            }
        };

        Ok(Self {
            emulators_only: session.targets.is_emulators(),
            project: session.project.map(|p| p.id.clone()),
            listeners,
        })
    }
}

fn emulator_listener(options: &ServeOptions, emulator: Emulator) -> Listener {
    let (host, port) = match emulator {
        Emulator::Database => (&options.database_host, options.database_port),
        Emulator::Firestore => (&options.firestore_host, options.firestore_port),
    };
    Listener {
        subsystem: Subsystem::Emulator(emulator),
        host: host.clone(),
        port,
        root: None,
    }
}

fn deploy_listener(session: &ServeSession<'_>, target: DeployTarget) -> Result<Listener> {
    let options = session.options;
    let root = session.root_dir();
    let (port, root) = match target {
        DeployTarget::Hosting => {
            let public = session
                .config
                .and_then(|c| c.config().hosting_entries().first())
                .map(|entry| root.join(&entry.public))
                .unwrap_or(root);
            (options.port, public)
        }
        DeployTarget::Functions => {
            let port = options.port.checked_add(1).ok_or_else(|| {
                Error::Serve(format!("no port available for functions after {}", options.port))
            })?;
            let source = session
                .config
                .and_then(|c| c.config().functions.as_ref())
                .map(|f| root.join(&f.source))
                .unwrap_or_else(|| root.join("functions"));
            (port, source)
        }
    };
    Ok(Listener {
        subsystem: Subsystem::Deploy(target),
        host: options.host.clone(),
        port,
        root: Some(root),
    })
}
