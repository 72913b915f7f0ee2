//! Dispatch: choose between an emulator-only session and a full project
//! serve, then hand the resolved targets to the backend.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::backend::{ServeBackend, ServeSession};
use crate::error::Result;
use crate::options::ServeOptions;
use crate::preconditions::GateOutcome;
use crate::target::{
    DeployTarget, DeployTargetFilter, Emulator, TargetName, filter_only_emulators,
    parse_target_list,
};

/// Subsystems a session activates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "targets", rename_all = "lowercase")]
pub enum ServeTargets {
    /// Never empty.
    Emulators(Vec<Emulator>),
    /// May be empty if filters exclude everything.
    Deploy(Vec<DeployTarget>),
}

impl ServeTargets {
    pub fn is_emulators(&self) -> bool {
        matches!(self, ServeTargets::Emulators(_))
    }

    pub fn names(&self) -> Vec<&'static str> {
        match self {
            ServeTargets::Emulators(emulators) => emulators.iter().map(|e| e.as_str()).collect(),
            ServeTargets::Deploy(targets) => targets.iter().map(|t| t.as_str()).collect(),
        }
    }
}

/// User-facing message emitted once before a full project serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Serving { project_dir: PathBuf },
    NoProjectDir { cwd: PathBuf },
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::NoProjectDir { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Serving { project_dir } => {
                format!("Serving from '{}'...", project_dir.display())
            }
            Notice::NoProjectDir { cwd } => format!(
                "No hearth project directory detected. Serving static content from {}",
                cwd.display()
            ),
        }
    }
}

/// Receives dispatch notices. Frontends render them.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_warning() {
            warn!("{}", notice.message());
        } else {
            info!("{}", notice.message());
        }
    }
}

/// Outcome of a dispatched session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub targets: ServeTargets,
    pub notice: Option<Notice>,
}

pub struct Dispatcher<'a> {
    filter: &'a dyn DeployTargetFilter,
    backend: &'a dyn ServeBackend,
    notifier: &'a dyn Notifier,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        filter: &'a dyn DeployTargetFilter,
        backend: &'a dyn ServeBackend,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            filter,
            backend,
            notifier,
        }
    }

    /// Resolve targets and run the backend. Backend errors pass through.
    pub fn dispatch(&self, options: &ServeOptions, outcome: &GateOutcome) -> Result<Resolution> {
        let emulators = filter_only_emulators(options.only.as_deref());
        if !emulators.is_empty() {
            warn_dropped_deploy_targets(options.only.as_deref().unwrap_or_default());
            info!(?emulators, "starting emulators");
            let targets = ServeTargets::Emulators(emulators);
            self.serve(options, outcome, &targets)?;
            return Ok(Resolution {
                targets,
                notice: None,
            });
        }

        let config = outcome.config();
        let notice = match config {
            Some(loaded) => Notice::Serving {
                project_dir: loaded.project_dir().to_path_buf(),
            },
            None => Notice::NoProjectDir {
                cwd: options.effective_cwd(),
            },
        };
        self.notifier.notify(&notice);

        let deploy = self.filter.filter(options, config, &DeployTarget::ALL);
        info!(targets = ?deploy, "serving project targets");
        let targets = ServeTargets::Deploy(deploy);
        self.serve(options, outcome, &targets)?;
        Ok(Resolution {
            targets,
            notice: Some(notice),
        })
    }

    fn serve(
        &self,
        options: &ServeOptions,
        outcome: &GateOutcome,
        targets: &ServeTargets,
    ) -> Result<()> {
        let session = ServeSession {
            options,
            targets,
            config: outcome.config(),
            project: outcome.project(),
        };
        self.backend.serve(&session)
    }
}

/// Deploy targets named next to an emulator in `--only` are not served.
fn warn_dropped_deploy_targets(only: &str) {
    let dropped: Vec<String> = parse_target_list(only)
        .into_iter()
        .filter(|token| matches!(token.target(), Some(TargetName::Deploy(_))))
        .map(|token| token.base)
        .collect();
    if !dropped.is_empty() {
        warn!(?dropped, "emulator-only session; ignoring deploy targets in --only");
    }
}
