//! scrcpy launcher.
//!
//! Builds the scrcpy command line from [`MirrorOptions`] and runs it in the
//! foreground with inherited stdio.

pub mod options;

pub use options::{build_args, KeyboardMode, MirrorOptions};

use crate::utils::error::ToolError;
use crate::utils::process::{display_command, resolve_tool, run_inherited};
use log::debug;
use std::path::Path;

/// Run scrcpy and block until it exits
///
/// # Errors
/// * `ToolError::NotFound` if scrcpy cannot be resolved
/// * `ToolError::Failed` if scrcpy exits non-zero
/// * `ToolError::Io` if it cannot be spawned
pub fn launch(scrcpy: &Path, options: &MirrorOptions) -> Result<(), ToolError> {
    let scrcpy = resolve_tool(scrcpy)?;
    let args = build_args(options);

    debug!("Running command: {}", display_command(&scrcpy, &args));
    debug!("Mirroring {}", options.serial);

    run_inherited(&scrcpy, &args)?;

    debug!("scrcpy exited");
    Ok(())
}
