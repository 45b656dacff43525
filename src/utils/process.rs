//! Helpers for running the external tools.
//!
//! Every call blocks until the child exits. There is no timeout: a hung
//! tool hangs the caller.

use crate::utils::error::ToolError;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Resolve a tool name or path to an executable
///
/// Bare names are searched on `PATH`; anything containing a path separator
/// is checked directly.
pub fn resolve_tool(tool: &Path) -> Result<PathBuf, ToolError> {
    which::which(tool).map_err(|_| ToolError::NotFound {
        tool: tool_name(tool),
    })
}

/// Run a tool to completion and capture its stdout
///
/// Non-zero exit is reported as `ToolError::Failed`.
pub fn run_captured<S: AsRef<str>>(tool: &Path, args: &[S]) -> Result<String, ToolError> {
    let output = spawn_output(tool, args)?;

    if !output.status.success() {
        debug!(
            "{} stderr: {}",
            tool_name(tool),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(ToolError::Failed {
            tool: tool_name(tool),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a tool with inherited stdio and wait for it to exit
pub fn run_inherited<S: AsRef<str>>(tool: &Path, args: &[S]) -> Result<(), ToolError> {
    let status = Command::new(tool)
        .args(args.iter().map(AsRef::<str>::as_ref))
        .status()
        .map_err(|e| spawn_error(tool, e))?;

    if !status.success() {
        return Err(ToolError::Failed {
            tool: tool_name(tool),
            code: status.code(),
        });
    }

    Ok(())
}

/// Render a command line for logging
pub fn display_command<S: AsRef<str>>(tool: &Path, args: &[S]) -> String {
    std::iter::once(tool.display().to_string())
        .chain(args.iter().map(|a| AsRef::<str>::as_ref(a).to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_output<S: AsRef<str>>(tool: &Path, args: &[S]) -> Result<Output, ToolError> {
    debug!("Running: {}", display_command(tool, args));

    Command::new(tool)
        .args(args.iter().map(AsRef::<str>::as_ref))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(tool, e))
}

fn spawn_error(tool: &Path, err: std::io::Error) -> ToolError {
    if err.kind() == ErrorKind::NotFound {
        ToolError::NotFound {
            tool: tool_name(tool),
        }
    } else {
        ToolError::Io {
            tool: tool_name(tool),
            source: err,
        }
    }
}

/// Short tool name used in messages (`adb` rather than `/usr/bin/adb`)
fn tool_name(tool: &Path) -> String {
    tool.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| tool.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let line = display_command(Path::new("scrcpy"), &["-s", "abc", "--no-audio"]);
        assert_eq!(line, "scrcpy -s abc --no-audio");
    }

    #[test]
    fn test_resolve_missing_tool() {
        let err = resolve_tool(Path::new("definitely-not-a-real-tool-7f3a")).unwrap_err();
        assert!(matches!(err, ToolError::NotFound { ref tool } if tool == "definitely-not-a-real-tool-7f3a"));
    }

    #[test]
    fn test_tool_name_strips_directories() {
        assert_eq!(tool_name(Path::new("/opt/android/platform-tools/adb")), "adb");
        assert_eq!(tool_name(Path::new("scrcpy")), "scrcpy");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_reports_exit_code() {
        let err = run_captured(Path::new("sh"), &["-c", "exit 3"]).unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_returns_stdout() {
        let out = run_captured(Path::new("sh"), &["-c", "echo hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
