//! Hearth Core Library
//!
//! Decision logic for `hearth serve`: which emulators or project targets
//! a session activates, and whether project preconditions must be
//! validated before it starts.

pub mod backend;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod preconditions;
pub mod target;

pub use error::{Error, Result};

/// Re-exports of commonly used types
pub mod prelude {
    // Request and outcome
    pub use crate::commands::{ServeCommand, ServeReport};
    pub use crate::context::AppContext;
    pub use crate::options::ServeOptions;

    // Targets
    pub use crate::target::{
        ConfiguredTargets, DeployTarget, DeployTargetFilter, Emulator, filter_only_emulators,
    };

    // Lifecycle
    pub use crate::backend::{Listener, ServeBackend, ServePlan, ServeSession, Subsystem};
    pub use crate::dispatch::{Dispatcher, Notice, Notifier, Resolution, ServeTargets};
    pub use crate::preconditions::{GateOutcome, PreconditionGate, PreconditionStep};

    pub use crate::error::{Error, Result};
}
