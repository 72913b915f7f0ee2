//! High-level commands for hearth operations.
//!
//! These are the entry points frontends call.

pub mod serve;

pub use serve::{ServeCommand, ServeReport};
