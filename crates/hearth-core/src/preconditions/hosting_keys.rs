use std::collections::BTreeMap;

use super::{PreconditionStep, ProjectState};
use crate::config::{HostingConfig, ProjectConfig};
use crate::error::{Error, Result};
use crate::options::ServeOptions;

const UNNAMED_KEY: &str = "(unnamed)";

/// Reject multi-site hosting configs where two entries share a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckDuplicateHostingKeys;

impl PreconditionStep for CheckDuplicateHostingKeys {
    fn name(&self) -> &'static str {
        "hosting-keys"
    }

    fn run(&self, _options: &ServeOptions, state: &mut ProjectState) -> Result<()> {
        let Some(loaded) = &state.config else {
            return Ok(());
        };
        let keys = duplicate_hosting_keys(loaded.config());
        if keys.is_empty() {
            Ok(())
        } else {
            Err(Error::DuplicateHostingKey { keys })
        }
    }
}

/// Keys used by more than one `[[hosting]]` entry, sorted.
///
/// A single `[hosting]` table never has duplicates. Entries without a
/// `target` or `site` all share the key `(unnamed)`.
pub fn duplicate_hosting_keys(config: &ProjectConfig) -> Vec<String> {
    let Some(HostingConfig::Multiple(entries)) = &config.hosting else {
        return Vec::new();
    };

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.key().unwrap_or(UNNAMED_KEY)).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}
