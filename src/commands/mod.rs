//! CLI command implementations.
//!
//! Commands orchestrate the device lister and the launcher.

pub mod models;
pub mod run;

// Re-export main command functions
pub use models::{LaunchArgs, Outcome};
pub use run::{run, validate_args};
