//! Project configuration and local credentials.
//!
//! - Project: `hearth.toml`, found by searching upward from the working directory
//! - Credentials: `~/.config/hearth/credentials.toml`

pub mod credentials;
pub mod discovery;
pub mod parser;
pub mod schema;

pub use credentials::{
    CREDENTIALS_FILE_NAME, CredentialStore, Credentials, ProjectGrant, TOKEN_ENV,
};
pub use discovery::{CONFIG_FILE_NAME, LoadedConfig, discover, find_config_file, load};
pub use parser::{parse_hearth_toml, parse_hearth_toml_str};
pub use schema::{FunctionsConfig, HostingConfig, HostingEntry, ProjectConfig, ProjectSection};
