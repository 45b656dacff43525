//! Device enumeration through `adb`.

use super::parser::{audio_capable, parse_devices_output, parse_sdk_level, DeviceLine};
use super::Device;
use crate::utils::config::SDK_PROPERTY;
use crate::utils::error::{SdkQueryError, ToolError};
use crate::utils::process::{resolve_tool, run_captured};
use log::debug;
use std::path::{Path, PathBuf};

/// Handle to a resolved `adb` executable
#[derive(Debug, Clone)]
pub struct Adb {
    path: PathBuf,
}

impl Adb {
    /// Resolve `adb` by name (searched on `PATH`) or explicit path
    pub fn new(tool: impl AsRef<Path>) -> Result<Self, ToolError> {
        let path = resolve_tool(tool.as_ref())?;
        debug!("Using adb at {}", path.display());
        Ok(Self { path })
    }

    /// Raw output of `adb devices -l`
    pub fn devices_output(&self) -> Result<String, ToolError> {
        run_captured(&self.path, &["devices", "-l"])
    }

    /// Raw output of `adb -s <serial> shell getprop ro.build.version.sdk`
    pub fn sdk_output(&self, serial: &str) -> Result<String, ToolError> {
        run_captured(&self.path, &["-s", serial, "shell", "getprop", SDK_PROPERTY])
    }
}

/// List every attached device in the `device` state
///
/// A device whose API level cannot be read or parsed is still listed, with
/// no level and no audio capability. That failure is only logged at debug
/// level.
///
/// # Errors
/// * `ToolError::NotFound` if adb disappears between resolution and use
/// * `ToolError::Failed` if `adb devices -l` exits non-zero
pub fn list_devices(adb: &Adb) -> Result<Vec<Device>, ToolError> {
    let output = adb.devices_output()?;
    let lines = parse_devices_output(&output);

    debug!("Found {} ready device(s)", lines.len());

    Ok(lines.into_iter().map(|line| annotate(adb, line)).collect())
}

fn annotate(adb: &Adb, line: DeviceLine) -> Device {
    let sdk_level = match query_sdk_level(adb, &line.serial) {
        Ok(level) => Some(level),
        Err(e) => {
            debug!("Error getting SDK version for {}: {}", line.serial, e);
            None
        }
    };

    Device {
        serial: line.serial,
        sdk_level,
        audio_capable: audio_capable(sdk_level),
        model: line.model,
        full_info: line.full_info,
    }
}

/// Read and parse the API level of one device
pub fn query_sdk_level(adb: &Adb, serial: &str) -> Result<u32, SdkQueryError> {
    let output = adb.sdk_output(serial)?;
    Ok(parse_sdk_level(&output)?)
}
