//! Android device discovery.
//!
//! This module:
//! - Runs `adb devices -l` and keeps ready devices
//! - Queries each device's platform API level
//! - Derives whether scrcpy can forward its audio

pub mod lister;
pub mod parser;

use serde::Serialize;

pub use lister::{list_devices, query_sdk_level, Adb};
pub use parser::{audio_capable, parse_device_line, parse_devices_output, parse_sdk_level};

/// An attached device, built fresh on every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// adb serial (first token of the listing line)
    pub serial: String,

    /// Platform API level, `None` if it could not be read
    pub sdk_level: Option<u32>,

    /// True iff `sdk_level` is at least 30
    pub audio_capable: bool,

    /// Model name from the listing, if reported
    pub model: Option<String>,

    /// Listing line as printed by adb
    pub full_info: String,
}

impl Device {
    /// One-line summary used by `--list-devices` and `--verbose`
    pub fn summary(&self) -> String {
        format!(
            "{} (Audio: {})",
            self.full_info,
            if self.audio_capable {
                "Possible"
            } else {
                "Not Possible"
            }
        )
    }
}
