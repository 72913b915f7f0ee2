//! Recording collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use hearth_core::backend::{ServeBackend, ServeSession};
use hearth_core::config::{LoadedConfig, ProjectConfig, parse_hearth_toml_str};
use hearth_core::dispatch::{Notice, Notifier, ServeTargets};
use hearth_core::error::{Error, Result};
use hearth_core::options::ServeOptions;
use hearth_core::preconditions::{PreconditionStep, ProjectState};
use hearth_core::target::{DeployTarget, DeployTargetFilter};

/// Ordered record of collaborator calls, shared between collaborators.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub fn loaded_config(project_dir: &str, toml: &str) -> LoadedConfig {
    let config: ProjectConfig = parse_hearth_toml_str(toml).unwrap();
    let dir = PathBuf::from(project_dir);
    LoadedConfig::new(dir.clone(), dir.join("hearth.toml"), config)
}

#[derive(Debug)]
pub struct RecordingStep {
    name: &'static str,
    log: CallLog,
    failure: Option<fn() -> Error>,
    provides: Option<LoadedConfig>,
}

impl RecordingStep {
    pub fn ok(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: log.clone(),
            failure: None,
            provides: None,
        }
    }

    pub fn failing(name: &'static str, log: &CallLog, failure: fn() -> Error) -> Self {
        Self {
            failure: Some(failure),
            ..Self::ok(name, log)
        }
    }

    pub fn providing(name: &'static str, log: &CallLog, config: LoadedConfig) -> Self {
        Self {
            provides: Some(config),
            ..Self::ok(name, log)
        }
    }
}

impl PreconditionStep for RecordingStep {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, _options: &ServeOptions, state: &mut ProjectState) -> Result<()> {
        self.log.push(self.name);
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        if let Some(config) = &self.provides {
            state.config = Some(config.clone());
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordingFilter {
    log: CallLog,
    result: Vec<DeployTarget>,
}

impl RecordingFilter {
    pub fn returning(log: &CallLog, result: Vec<DeployTarget>) -> Self {
        Self {
            log: log.clone(),
            result,
        }
    }
}

impl DeployTargetFilter for RecordingFilter {
    fn filter(
        &self,
        _options: &ServeOptions,
        _config: Option<&LoadedConfig>,
        known: &[DeployTarget],
    ) -> Vec<DeployTarget> {
        assert_eq!(known, DeployTarget::ALL.as_slice());
        self.log.push("filter");
        self.result.clone()
    }
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: CallLog,
    served: RefCell<Vec<ServeTargets>>,
    fail: bool,
}

impl RecordingBackend {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            served: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(log: &CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    pub fn served(&self) -> Vec<ServeTargets> {
        self.served.borrow().clone()
    }
}

impl ServeBackend for RecordingBackend {
    fn serve(&self, session: &ServeSession<'_>) -> Result<()> {
        self.log.push("serve");
        self.served.borrow_mut().push(session.targets.clone());
        if self.fail {
            return Err(Error::Serve("address already in use".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    log: CallLog,
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            notices: RefCell::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.log.push("notify");
        self.notices.borrow_mut().push(notice.clone());
    }
}
