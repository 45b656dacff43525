use crate::launcher::{KeyboardMode, MirrorOptions};
use crate::utils::config::{DEFAULT_ADB, DEFAULT_SCRCPY};
use std::path::PathBuf;

/// Arguments for a single invocation
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct LaunchArgs {
    /// Target device serial
    pub serial: Option<String>,

    /// Video codec forwarded to scrcpy
    pub video_codec: Option<String>,

    /// Maximum resolution
    pub max_size: Option<u32>,

    /// Maximum frames per second
    pub max_fps: Option<u32>,

    /// Disable audio forwarding
    pub no_audio: bool,

    pub keyboard_mode: KeyboardMode,

    /// Only list devices, then exit
    pub list_devices: bool,

    /// Print the device list as JSON (list mode only)
    pub json: bool,

    /// Print every found device before launching
    pub verbose: bool,

    /// adb name or path
    pub adb: PathBuf,

    /// scrcpy name or path
    pub scrcpy: PathBuf,

    /// Trailing arguments passed verbatim to scrcpy
    pub extra_args: Vec<String>,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self {
            serial: None,
            video_codec: None,
            max_size: None,
            max_fps: None,
            no_audio: false,
            keyboard_mode: KeyboardMode::Default,
            list_devices: false,
            json: false,
            verbose: false,
            adb: PathBuf::from(DEFAULT_ADB),
            scrcpy: PathBuf::from(DEFAULT_SCRCPY),
            extra_args: Vec::new(),
        }
    }
}

impl LaunchArgs {
    /// scrcpy options for `serial`
    pub fn mirror_options(&self, serial: &str) -> MirrorOptions {
        MirrorOptions {
            serial: serial.to_string(),
            video_codec: self.video_codec.clone(),
            max_size: self.max_size,
            max_fps: self.max_fps,
            audio: !self.no_audio,
            keyboard_mode: self.keyboard_mode,
            extra_args: self.extra_args.clone(),
        }
    }
}

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `--list-devices` finished (with or without devices)
    Listed,

    /// No ready device was attached
    NoDevices,

    /// Neither `--serial` nor `--list-devices` was given
    MissingSerial,

    /// scrcpy ran and exited successfully
    Launched,

    /// adb or scrcpy failed; already reported on stderr
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Listed | Outcome::Launched => 0,
            Outcome::NoDevices | Outcome::MissingSerial | Outcome::Failed => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Listed.exit_code(), 0);
        assert_eq!(Outcome::Launched.exit_code(), 0);
        assert_eq!(Outcome::NoDevices.exit_code(), 1);
        assert_eq!(Outcome::MissingSerial.exit_code(), 1);
        assert_eq!(Outcome::Failed.exit_code(), 1);
    }

    #[test]
    fn test_mirror_options_inverts_no_audio() {
        let args = LaunchArgs {
            no_audio: true,
            max_fps: Some(30),
            ..Default::default()
        };
        let options = args.mirror_options("abc123");

        assert!(!options.audio);
        assert_eq!(options.serial, "abc123");
        assert_eq!(options.max_fps, Some(30));
    }
}
