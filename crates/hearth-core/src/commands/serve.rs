//! Serve command implementation.
//!
//! Runs the precondition gate, then dispatches the session to a backend.

use tracing::debug;

use crate::backend::ServeBackend;
use crate::context::AppContext;
use crate::dispatch::{Dispatcher, Notifier, Resolution};
use crate::error::Result;
use crate::options::ServeOptions;
use crate::preconditions::{PreconditionGate, ProjectIdentity};
use crate::target::{ConfiguredTargets, DeployTargetFilter};

/// Report from a completed serve session
#[derive(Debug, Clone)]
pub struct ServeReport {
    /// Whether the precondition gate was skipped (emulator-only request)
    pub gate_skipped: bool,
    /// Project the session was validated against
    pub project: Option<ProjectIdentity>,
    /// Targets handed to the backend and the notice emitted, if any
    pub resolution: Resolution,
}

/// Serve command orchestrator
#[derive(Debug)]
pub struct ServeCommand {
    gate: PreconditionGate,
    filter: Box<dyn DeployTargetFilter>,
}

impl ServeCommand {
    pub fn new(gate: PreconditionGate, filter: Box<dyn DeployTargetFilter>) -> Self {
        Self { gate, filter }
    }

    /// Standard gate and config-driven target filter for the given context.
    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.precondition_gate(), Box::new(ConfiguredTargets))
    }

    /// Create a serve command with default paths
    pub fn with_defaults() -> Self {
        Self::from_context(&AppContext::with_defaults())
    }

    /// Execute the serve command.
    ///
    /// A failing precondition returns before the notifier or the backend
    /// is touched.
    pub fn execute(
        &self,
        options: &ServeOptions,
        backend: &dyn ServeBackend,
        notifier: &dyn Notifier,
    ) -> Result<ServeReport> {
        let outcome = self.gate.run(options)?;
        debug!(skipped = outcome.is_skipped(), "preconditions satisfied");

        let dispatcher = Dispatcher::new(self.filter.as_ref(), backend, notifier);
        let resolution = dispatcher.dispatch(options, &outcome)?;

        Ok(ServeReport {
            gate_skipped: outcome.is_skipped(),
            project: outcome.project().cloned(),
            resolution,
        })
    }
}
