//! Utility modules for configuration, error handling, and process execution.

pub mod config;
pub mod error;
pub mod process;

// Re-export commonly used error types for convenience
pub use error::{ParseError, SdkQueryError, ToolError};
