//! scrcpy invocation options and argument construction.

use clap::ValueEnum;

/// Keyboard injection mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyboardMode {
    /// Let scrcpy pick its default keyboard mode
    #[default]
    Default,

    /// Simulate a physical HID keyboard through Android UHID
    Uhid,
}

/// Options forwarded to scrcpy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOptions {
    /// Target device serial
    pub serial: String,

    /// Video codec name (e.g. h264, h265, av1)
    pub video_codec: Option<String>,

    /// Maximum dimension of the mirrored video
    pub max_size: Option<u32>,

    /// Maximum capture frame rate
    pub max_fps: Option<u32>,

    /// Forward device audio
    pub audio: bool,

    pub keyboard_mode: KeyboardMode,

    /// Passed to scrcpy verbatim, after everything else
    pub extra_args: Vec<String>,
}

impl MirrorOptions {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            video_codec: None,
            max_size: None,
            max_fps: None,
            audio: true,
            keyboard_mode: KeyboardMode::Default,
            extra_args: Vec::new(),
        }
    }
}

/// Build the scrcpy argument list
///
/// Zero sizes and frame rates are left out so scrcpy applies its own
/// defaults. Audio is on unless `--no-audio` is emitted; no flag ever
/// enables it explicitly.
pub fn build_args(options: &MirrorOptions) -> Vec<String> {
    let mut args = vec!["-s".to_string(), options.serial.clone()];

    if let Some(codec) = options.video_codec.as_deref().filter(|c| !c.is_empty()) {
        args.push("--video-codec".to_string());
        args.push(codec.to_string());
    }

    if let Some(size) = options.max_size.filter(|&s| s > 0) {
        args.push("-m".to_string());
        args.push(size.to_string());
    }

    if let Some(fps) = options.max_fps.filter(|&f| f > 0) {
        args.push("--max-fps".to_string());
        args.push(fps.to_string());
    }

    if !options.audio {
        args.push("--no-audio".to_string());
    }

    if options.keyboard_mode == KeyboardMode::Uhid {
        args.push("--keyboard=uhid".to_string());
    }

    args.extend(options.extra_args.iter().cloned());

    args
}
