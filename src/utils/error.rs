//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.

use thiserror::Error;

/// Errors that can occur while running an external tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{tool} not found. Make sure it's installed and in your PATH.")]
    NotFound { tool: String },

    #[error("{tool} exited with {}", describe_code(.code))]
    Failed { tool: String, code: Option<i32> },

    #[error("Failed to run {tool}: {source}")]
    Io {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Exit code reported by the tool, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Errors that can occur while parsing tool output
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid SDK level: {0:?}")]
    InvalidSdk(String),
}

/// Errors that can occur while reading a device's API level
#[derive(Error, Debug)]
pub enum SdkQueryError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
