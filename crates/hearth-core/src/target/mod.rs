//! Known serve targets: the emulator and deploy-target vocabularies.
//!
//! The two vocabularies are disjoint. `--only` may mix names from both,
//! `--except` only names deploy targets, and each filter matches against
//! its own vocabulary.

pub mod deploy;
pub mod emulators;
pub mod targeting;
pub mod token;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use deploy::{ConfiguredTargets, DeployTargetFilter};
pub use emulators::filter_only_emulators;
pub use targeting::TargetingPolicy;
pub use token::{TargetToken, parse_target_list};

/// A locally-run stand-in for a remote backing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emulator {
    Database,
    Firestore,
}

impl Emulator {
    /// Every emulator, in canonical order.
    pub const ALL: [Emulator; 2] = [Emulator::Database, Emulator::Firestore];

    pub fn as_str(self) -> &'static str {
        match self {
            Emulator::Database => "database",
            Emulator::Firestore => "firestore",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for Emulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project subsystem that can be served locally without emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    Functions,
    Hosting,
}

impl DeployTarget {
    /// Every deploy target, in canonical order.
    pub const ALL: [DeployTarget; 2] = [DeployTarget::Functions, DeployTarget::Hosting];

    pub fn as_str(self) -> &'static str {
        match self {
            DeployTarget::Functions => "functions",
            DeployTarget::Hosting => "hosting",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name from either vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetName {
    Emulator(Emulator),
    Deploy(DeployTarget),
}

impl TargetName {
    pub fn from_name(name: &str) -> Option<Self> {
        Emulator::from_name(name)
            .map(TargetName::Emulator)
            .or_else(|| DeployTarget::from_name(name).map(TargetName::Deploy))
    }
}

/// Names accepted by `--only`: deploy targets followed by emulators.
pub fn only_target_names() -> Vec<&'static str> {
    DeployTarget::ALL
        .iter()
        .map(|t| t.as_str())
        .chain(Emulator::ALL.iter().map(|e| e.as_str()))
        .collect()
}

/// Names accepted by `--except`.
pub fn except_target_names() -> Vec<&'static str> {
    DeployTarget::ALL.iter().map(|t| t.as_str()).collect()
}
