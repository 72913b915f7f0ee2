//! Configuration schema for hearth.toml
//!
//! ```toml
//! [project]
//! id = "my-app"
//! number = "123456789"
//!
//! [hosting]            # or [[hosting]] for several sites
//! public = "public"
//!
//! [functions]
//! source = "functions"
//! ```

use serde::{Deserialize, Deserializer};

use crate::target::DeployTarget;

/// Root configuration structure for hearth.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Project identity
    #[serde(default)]
    pub project: ProjectSection,

    /// Static hosting, one site or several
    #[serde(default)]
    pub hosting: Option<HostingConfig>,

    /// Functions source
    #[serde(default)]
    pub functions: Option<FunctionsConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectSection {
    #[serde(default)]
    pub id: Option<String>,

    /// Accepted as a string or an integer
    #[serde(default, deserialize_with = "deserialize_project_number")]
    pub number: Option<String>,
}

/// `[hosting]` or `[[hosting]]`
///
/// `Multiple` must stay first so `hosting = []` parses as zero sites.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HostingConfig {
    Multiple(Vec<HostingEntry>),
    Single(HostingEntry),
}

impl HostingConfig {
    pub fn entries(&self) -> &[HostingEntry] {
        match self {
            HostingConfig::Single(entry) => std::slice::from_ref(entry),
            HostingConfig::Multiple(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostingEntry {
    /// Directory of static content, relative to the project directory
    #[serde(default = "default_public")]
    pub public: String,

    #[serde(default)]
    pub site: Option<String>,

    /// Deploy target alias; takes precedence over `site` as the entry key
    #[serde(default)]
    pub target: Option<String>,
}

impl HostingEntry {
    /// Key used to tell hosting entries apart.
    pub fn key(&self) -> Option<&str> {
        self.target.as_deref().or(self.site.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionsConfig {
    /// Functions source directory, relative to the project directory
    #[serde(default = "default_functions_source")]
    pub source: String,
}

fn default_public() -> String {
    "public".to_string()
}

fn default_functions_source() -> String {
    "functions".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectNumber {
    Text(String),
    Integer(u64),
}

pub(crate) fn deserialize_project_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawProjectNumber>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawProjectNumber::Text(text) => text,
        RawProjectNumber::Integer(n) => n.to_string(),
    }))
}

impl ProjectConfig {
    /// Whether the config declares the given deploy target.
    ///
    /// An empty `hosting = []` declares no site.
    pub fn has(&self, target: DeployTarget) -> bool {
        match target {
            DeployTarget::Functions => self.functions.is_some(),
            DeployTarget::Hosting => !self.hosting_entries().is_empty(),
        }
    }

    pub fn hosting_entries(&self) -> &[HostingEntry] {
        self.hosting.as_ref().map(HostingConfig::entries).unwrap_or(&[])
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(self.project.id.as_deref()) {
            return Err("project.id must not be empty".to_string());
        }
        if is_blank(self.project.number.as_deref()) {
            return Err("project.number must not be empty".to_string());
        }
        if self
            .hosting_entries()
            .iter()
            .any(|entry| entry.public.trim().is_empty())
        {
            return Err("hosting.public must not be empty".to_string());
        }
        if is_blank(self.functions.as_ref().map(|f| f.source.as_str())) {
            return Err("functions.source must not be empty".to_string());
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().is_empty())
}
