mod support;

use std::path::PathBuf;

use hearth_core::backend::{ServePlan, ServeSession, Subsystem};
use hearth_core::dispatch::ServeTargets;
use hearth_core::error::Error;
use hearth_core::options::ServeOptions;
use hearth_core::preconditions::ProjectIdentity;
use hearth_core::target::{DeployTarget, Emulator};

use support::loaded_config;

#[test]
fn emulators_bind_their_own_flags() {
    let mut options = ServeOptions::new();
    options.firestore_host = "0.0.0.0".to_string();
    options.firestore_port = 8181;
    let targets = ServeTargets::Emulators(vec![Emulator::Database, Emulator::Firestore]);
    let session = ServeSession {
        options: &options,
        targets: &targets,
        config: None,
        project: None,
    };

    let plan = ServePlan::build(&session).unwrap();

    assert!(plan.emulators_only);
    let addresses: Vec<String> = plan.listeners.iter().map(|l| l.address()).collect();
    assert_eq!(addresses, vec!["localhost:9000", "0.0.0.0:8181"]);
    assert_eq!(
        plan.listeners[0].subsystem,
        Subsystem::Emulator(Emulator::Database)
    );
    assert!(plan.listeners.iter().all(|l| l.root.is_none()));
}

#[test]
fn project_targets_use_config_directories() {
    let options = ServeOptions::new().with_port(6000);
    let loaded = loaded_config(
        "/work/site",
        "[hosting]\npublic = \"dist\"\n[functions]\nsource = \"api\"\n",
    );
    let project = ProjectIdentity {
        id: "my-app".to_string(),
        number: Some("1".to_string()),
    };
    let targets = ServeTargets::Deploy(vec![DeployTarget::Functions, DeployTarget::Hosting]);
    let session = ServeSession {
        options: &options,
        targets: &targets,
        config: Some(&loaded),
        project: Some(&project),
    };

    let plan = ServePlan::build(&session).unwrap();

    assert!(!plan.emulators_only);
    assert_eq!(plan.project.as_deref(), Some("my-app"));
    let functions = &plan.listeners[0];
    assert_eq!(functions.address(), "localhost:6001");
    assert_eq!(functions.root, Some(PathBuf::from("/work/site/api")));
    let hosting = &plan.listeners[1];
    assert_eq!(hosting.address(), "localhost:6000");
    assert_eq!(hosting.root, Some(PathBuf::from("/work/site/dist")));
}

#[test]
fn hosting_without_config_serves_working_directory() {
    let options = ServeOptions::new().with_cwd("/srv/static");
    let targets = ServeTargets::Deploy(vec![DeployTarget::Hosting]);
    let session = ServeSession {
        options: &options,
        targets: &targets,
        config: None,
        project: None,
    };

    let plan = ServePlan::build(&session).unwrap();

    assert_eq!(plan.listeners.len(), 1);
    assert_eq!(plan.listeners[0].root, Some(PathBuf::from("/srv/static")));
}

#[test]
fn empty_deploy_targets_have_nothing_to_serve() {
    let options = ServeOptions::new();
    let targets = ServeTargets::Deploy(Vec::new());
    let session = ServeSession {
        options: &options,
        targets: &targets,
        config: None,
        project: None,
    };

    let err = ServePlan::build(&session).unwrap_err();
    assert!(matches!(err, Error::Serve(_)));
}

#[test]
fn functions_port_overflow_is_rejected() {
    let options = ServeOptions::new().with_port(u16::MAX);
    let targets = ServeTargets::Deploy(vec![DeployTarget::Functions]);
    let session = ServeSession {
        options: &options,
        targets: &targets,
        config: None,
        project: None,
    };

    assert!(matches!(
        ServePlan::build(&session).unwrap_err(),
        Error::Serve(_)
    ));
}
