//! Parsers for `adb` plain-text output.

use crate::utils::config::MIN_AUDIO_SDK;
use crate::utils::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

/// One ready device as reported by `adb devices -l`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLine {
    /// First whitespace-delimited token of the line
    pub serial: String,

    /// `model:` field, when the bridge reports one
    pub model: Option<String>,

    /// The trimmed line as printed by adb
    pub full_info: String,
}

fn device_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+device(?:\s+(.*))?$").expect("valid device regex"))
}

fn model_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)model:(\S+)").expect("valid model regex"))
}

/// Parse the output of `adb devices -l`
///
/// The header line, blank lines and daemon notices (`* daemon ...`) are
/// skipped, as are devices in any state other than `device`
/// (`offline`, `unauthorized`, `recovery`, ...).
pub fn parse_devices_output(output: &str) -> Vec<DeviceLine> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
        .filter_map(parse_device_line)
        .collect()
}

/// Parse a single listing line, returning `None` unless the device is ready
pub fn parse_device_line(line: &str) -> Option<DeviceLine> {
    let line = line.trim();
    let caps = device_line_regex().captures(line)?;

    let model = caps
        .get(2)
        .and_then(|details| model_regex().captures(details.as_str()))
        .map(|m| m[1].to_string());

    Some(DeviceLine {
        serial: caps[1].to_string(),
        model,
        full_info: line.to_string(),
    })
}

/// Parse the output of `getprop ro.build.version.sdk`
pub fn parse_sdk_level(output: &str) -> Result<u32, ParseError> {
    let trimmed = output.trim();
    trimmed
        .parse()
        .map_err(|_| ParseError::InvalidSdk(trimmed.to_string()))
}

/// Whether scrcpy can forward audio from a device at this API level
pub fn audio_capable(sdk_level: Option<u32>) -> bool {
    sdk_level.is_some_and(|level| level >= MIN_AUDIO_SDK)
}
