//! Driver for a single invocation.
//!
//! The driver:
//! 1. Validates arguments
//! 2. Resolves adb and lists ready devices
//! 3. Prints the list and stops (`--list-devices`), or
//! 4. Checks the target device and launches scrcpy

use super::models::{LaunchArgs, Outcome};
use crate::device::{list_devices, Adb, Device};
use crate::launcher::launch;
use crate::utils::config::{MIN_AUDIO_SDK, NO_DEVICES_MESSAGE};
use anyhow::{Context, Result};
use log::{error, warn};

/// Execute one invocation
///
/// **Public** - main entry point called from main.rs
///
/// Tool failures are reported through `log::error!` and turned into
/// `Outcome::Failed`; only argument validation errors are returned.
pub fn run(args: &LaunchArgs) -> Result<Outcome> {
    validate_args(args)?;

    if !args.list_devices && args.serial.is_none() {
        return Ok(Outcome::MissingSerial);
    }

    let devices = match Adb::new(&args.adb).and_then(|adb| list_devices(&adb)) {
        Ok(devices) => devices,
        Err(e) => {
            error!("Error communicating with adb: {}", e);
            return Ok(Outcome::Failed);
        }
    };

    if args.list_devices {
        print_devices(&devices, args.json)?;
        return Ok(Outcome::Listed);
    }

    if devices.is_empty() {
        eprintln!("{}", NO_DEVICES_MESSAGE);
        return Ok(Outcome::NoDevices);
    }

    if args.verbose {
        for device in &devices {
            println!("Found device: {}", device.summary());
        }
    }

    let serial = args
        .serial
        .as_deref()
        .context("serial is required to launch scrcpy")?;

    check_target(&devices, serial, !args.no_audio);

    match launch(&args.scrcpy, &args.mirror_options(serial)) {
        Ok(()) => Ok(Outcome::Launched),
        Err(e) => {
            error!("Error running scrcpy: {}", e);
            Ok(Outcome::Failed)
        }
    }
}

/// Validate arguments before touching any external tool
///
/// **Public** - can be called before run for early validation
pub fn validate_args(args: &LaunchArgs) -> Result<()> {
    if let Some(serial) = &args.serial {
        if serial.trim().is_empty() {
            anyhow::bail!("Serial cannot be empty");
        }
        if serial.chars().any(char::is_whitespace) {
            anyhow::bail!("Serial cannot contain whitespace");
        }
    }

    if let Some(codec) = &args.video_codec {
        if codec.trim().is_empty() {
            anyhow::bail!("Video codec cannot be empty");
        }
    }

    if args.json && !args.list_devices {
        anyhow::bail!("--json only applies to --list-devices");
    }

    if args.adb.as_os_str().is_empty() {
        anyhow::bail!("adb path cannot be empty");
    }

    if args.scrcpy.as_os_str().is_empty() {
        anyhow::bail!("scrcpy path cannot be empty");
    }

    Ok(())
}

fn print_devices(devices: &[Device], json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(devices).context("Failed to serialize device list")?;
        println!("{}", rendered);
        return Ok(());
    }

    if devices.is_empty() {
        println!("{}", NO_DEVICES_MESSAGE);
        return Ok(());
    }

    for device in devices {
        println!("{}", device.summary());
    }

    Ok(())
}

/// Warn about a target scrcpy is likely to reject
fn check_target(devices: &[Device], serial: &str, audio: bool) {
    match devices.iter().find(|d| d.serial == serial) {
        None => warn!("Device {} is not in the list of ready devices", serial),
        Some(device) if audio && !device.audio_capable => warn!(
            "Audio forwarding needs API level {} or newer; {} reports {}",
            MIN_AUDIO_SDK,
            serial,
            device
                .sdk_level
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ),
        Some(_) => {}
    }
}
