//! Tests for deploy-target filtering.

mod support;

use hearth_core::options::ServeOptions;
use hearth_core::target::{ConfiguredTargets, DeployTarget, DeployTargetFilter, TargetingPolicy};

use support::loaded_config;

const BOTH: &str = "[hosting]\n[functions]\n";

fn resolve(options: &ServeOptions, toml: Option<&str>) -> Vec<DeployTarget> {
    let config = toml.map(|t| loaded_config("/p", t));
    ConfiguredTargets.filter(options, config.as_ref(), &DeployTarget::ALL)
}

#[test]
fn targeting_empty_allows_all() {
    let policy = TargetingPolicy::new(None, None);
    assert!(policy.should_serve(DeployTarget::Hosting));
    assert!(policy.should_serve(DeployTarget::Functions));
}

#[test]
fn targeting_whitelist_only_allows_listed() {
    let policy = TargetingPolicy::new(Some(vec![DeployTarget::Hosting]), None);
    assert!(policy.should_serve(DeployTarget::Hosting));
    assert!(!policy.should_serve(DeployTarget::Functions));
}

#[test]
fn targeting_blacklist_excludes_listed() {
    let policy = TargetingPolicy::new(None, Some(vec![DeployTarget::Functions]));
    assert!(policy.should_serve(DeployTarget::Hosting));
    assert!(!policy.should_serve(DeployTarget::Functions));
}

#[test]
fn targeting_whitelist_takes_precedence() {
    let policy = TargetingPolicy::from_options(Some("hosting"), Some("hosting"));
    assert!(policy.should_serve(DeployTarget::Hosting));
    assert!(!policy.should_serve(DeployTarget::Functions));
}

#[test]
fn serves_everything_the_config_declares() {
    assert_eq!(
        resolve(&ServeOptions::new(), Some(BOTH)),
        vec![DeployTarget::Functions, DeployTarget::Hosting]
    );
    assert_eq!(
        resolve(&ServeOptions::new(), Some("[functions]\n")),
        vec![DeployTarget::Functions]
    );
}

#[test]
fn only_narrows_and_ignores_qualifiers_and_emulators() {
    let options = ServeOptions::new().with_only("hosting:blog,firestore");
    assert_eq!(resolve(&options, Some(BOTH)), vec![DeployTarget::Hosting]);
}

#[test]
fn except_removes_targets() {
    let options = ServeOptions::new().with_except("functions");
    assert_eq!(resolve(&options, Some(BOTH)), vec![DeployTarget::Hosting]);
}

#[test]
fn only_cannot_add_undeclared_targets() {
    let options = ServeOptions::new().with_only("functions");
    assert!(resolve(&options, Some("[hosting]\n")).is_empty());
}

#[test]
fn unknown_only_tokens_select_nothing() {
    let options = ServeOptions::new().with_only("storage");
    assert!(resolve(&options, Some(BOTH)).is_empty());
}

#[test]
fn without_config_only_hosting_is_available() {
    assert_eq!(
        resolve(&ServeOptions::new(), None),
        vec![DeployTarget::Hosting]
    );
    let options = ServeOptions::new().with_except("hosting");
    assert!(resolve(&options, None).is_empty());
}

#[test]
fn empty_only_string_is_treated_as_absent() {
    let options = ServeOptions::new().with_only("");
    assert_eq!(resolve(&options, Some(BOTH)).len(), 2);
}

#[test]
fn empty_hosting_array_is_not_served() {
    assert_eq!(
        resolve(&ServeOptions::new(), Some("hosting = []\n[functions]\n")),
        vec![DeployTarget::Functions]
    );
}
