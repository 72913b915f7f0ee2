//! Deploy-target resolution for full project serves.

use std::fmt::Debug;

use super::{DeployTarget, TargetingPolicy};
use crate::config::LoadedConfig;
use crate::options::ServeOptions;

/// Resolves which deploy targets a full project serve activates.
pub trait DeployTargetFilter: Debug {
    /// Filter `known` down to the targets to serve, in `known` order.
    ///
    /// Emulator names in `--only`/`--except` must be ignored.
    fn filter(
        &self,
        options: &ServeOptions,
        config: Option<&LoadedConfig>,
        known: &[DeployTarget],
    ) -> Vec<DeployTarget>;
}

/// Targets declared in hearth.toml, narrowed by `--only`/`--except`.
///
/// Without a config only hosting is available, serving static content
/// from the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredTargets;

impl DeployTargetFilter for ConfiguredTargets {
    fn filter(
        &self,
        options: &ServeOptions,
        config: Option<&LoadedConfig>,
        known: &[DeployTarget],
    ) -> Vec<DeployTarget> {
        let policy =
            TargetingPolicy::from_options(options.only.as_deref(), options.except.as_deref());

        known
            .iter()
            .copied()
            .filter(|target| match config {
                Some(loaded) => loaded.has(*target),
                None => *target == DeployTarget::Hosting,
            })
            .filter(|target| policy.should_serve(*target))
            .collect()
    }
}
