//! Only/except policy for deploy targets.

use tracing::warn;

use super::{DeployTarget, TargetName, parse_target_list};

/// Policy for determining which deploy targets to serve.
#[derive(Debug, Clone, Default)]
pub struct TargetingPolicy {
    /// Whitelist: only serve these targets (if Some)
    only: Option<Vec<DeployTarget>>,
    /// Blacklist: skip these targets (if Some, and only is None)
    except: Option<Vec<DeployTarget>>,
}

impl TargetingPolicy {
    pub fn new(only: Option<Vec<DeployTarget>>, except: Option<Vec<DeployTarget>>) -> Self {
        Self { only, except }
    }

    /// Build a policy from raw `--only`/`--except` values.
    ///
    /// Emulator names are dropped silently; names outside both
    /// vocabularies are logged and dropped.
    pub fn from_options(only: Option<&str>, except: Option<&str>) -> Self {
        Self::new(
            only.filter(|s| !s.is_empty()).map(deploy_targets_in),
            except.filter(|s| !s.is_empty()).map(deploy_targets_in),
        )
    }

    /// Check if the given target should be served.
    pub fn should_serve(&self, target: DeployTarget) -> bool {
        if let Some(ref whitelist) = self.only {
            return whitelist.contains(&target);
        }
        if let Some(ref blacklist) = self.except {
            return !blacklist.contains(&target);
        }
        true
    }
}

fn deploy_targets_in(raw: &str) -> Vec<DeployTarget> {
    parse_target_list(raw)
        .into_iter()
        .filter_map(|token| match token.target() {
            Some(TargetName::Deploy(target)) => Some(target),
            Some(TargetName::Emulator(_)) => None,
            None => {
                warn!(token = %token.base, "ignoring unknown serve target");
                None
            }
        })
        .collect()
}
