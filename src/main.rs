//! scrcpy-launch CLI
//!
//! Lists attached Android devices and launches scrcpy with forwarded options.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use scrcpy_launch::commands::{run, LaunchArgs, Outcome};
use scrcpy_launch::launcher::KeyboardMode;
use scrcpy_launch::utils::config::{DEFAULT_ADB, DEFAULT_SCRCPY};

/// Launch scrcpy with options.
#[derive(Parser, Debug)]
#[command(name = "scrcpy-launch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Serial number of the target device
    #[arg(short, long)]
    serial: Option<String>,

    /// Video codec (e.g., h264, h265, av1)
    #[arg(short = 'v', long)]
    video_codec: Option<String>,

    /// Maximum resolution
    #[arg(short, long)]
    max_size: Option<u32>,

    /// Maximum frames per second
    #[arg(short = 'f', long)]
    max_fps: Option<u32>,

    /// Disable audio forwarding
    #[arg(short, long)]
    no_audio: bool,

    /// Keyboard mode to use
    #[arg(short, long, value_enum, default_value_t = KeyboardMode::Default)]
    keyboard_mode: KeyboardMode,

    /// List connected devices and exit
    #[arg(short, long)]
    list_devices: bool,

    /// Print the device list as JSON (with --list-devices)
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,

    /// adb executable name or path
    #[arg(long, env = "ADB", default_value = DEFAULT_ADB)]
    adb: PathBuf,

    /// scrcpy executable name or path
    #[arg(long, env = "SCRCPY", default_value = DEFAULT_SCRCPY)]
    scrcpy: PathBuf,

    /// Extra arguments passed to scrcpy unchanged
    #[arg(last = true)]
    extra_args: Vec<String>,
}

impl From<Cli> for LaunchArgs {
    fn from(cli: Cli) -> Self {
        Self {
            serial: cli.serial,
            video_codec: cli.video_codec,
            max_size: cli.max_size,
            max_fps: cli.max_fps,
            no_audio: cli.no_audio,
            keyboard_mode: cli.keyboard_mode,
            list_devices: cli.list_devices,
            json: cli.json,
            verbose: cli.verbose,
            adb: cli.adb,
            scrcpy: cli.scrcpy,
            extra_args: cli.extra_args,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let outcome = run(&LaunchArgs::from(cli))?;

    if outcome == Outcome::MissingSerial {
        eprintln!("error: --serial is required unless --list-devices is given\n");
        eprintln!("{}", Cli::command().render_help());
    }

    Ok(ExitCode::from(outcome.exit_code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "scrcpy-launch", "-s", "abc123", "-v", "h264", "-m", "1024", "-f", "30", "-n", "-k",
            "uhid",
        ])
        .unwrap();

        assert_eq!(cli.serial.as_deref(), Some("abc123"));
        assert_eq!(cli.video_codec.as_deref(), Some("h264"));
        assert_eq!(cli.max_size, Some(1024));
        assert_eq!(cli.max_fps, Some(30));
        assert!(cli.no_audio);
        assert_eq!(cli.keyboard_mode, KeyboardMode::Uhid);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_keyboard_mode_rejects_unknown() {
        assert!(Cli::try_parse_from(["scrcpy-launch", "-k", "sdk"]).is_err());
    }

    #[test]
    fn test_trailing_args() {
        let cli = Cli::try_parse_from([
            "scrcpy-launch", "-s", "abc123", "--", "--turn-screen-off", "--stay-awake",
        ])
        .unwrap();
        assert_eq!(cli.extra_args, vec!["--turn-screen-off", "--stay-awake"]);
    }
}
