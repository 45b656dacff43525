//! Configuration and constants for the CLI.

/// Device-bridge executable used when neither `--adb` nor `ADB` is set
pub const DEFAULT_ADB: &str = "adb";

/// Mirroring executable used when neither `--scrcpy` nor `SCRCPY` is set
pub const DEFAULT_SCRCPY: &str = "scrcpy";

/// Lowest platform API level (Android 11) that scrcpy can forward audio from
pub const MIN_AUDIO_SDK: u32 = 30;

/// System property holding the platform API level
pub const SDK_PROPERTY: &str = "ro.build.version.sdk";

/// Printed when the bridge reports no ready devices
pub const NO_DEVICES_MESSAGE: &str = "No devices found.";
