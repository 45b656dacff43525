//! Fake `adb` and `scrcpy` executables for integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Listing printed by the fake adb: two ready devices, one offline, one
/// unauthorized, plus daemon chatter.
pub const LISTING: &str = "List of devices attached
* daemon not running; starting now at tcp:5037
* daemon started successfully
pixel7                 device usb:1-1 product:panther model:Pixel_7 device:panther transport_id:1
oldphone               device usb:1-2 product:j7 model:SM_J700F device:j7elte transport_id:2
flaky                  device usb:1-3 transport_id:3
192.168.1.20:5555      offline transport_id:4
0123456789ABCDEF       unauthorized usb:1-4 transport_id:5
";

/// Write an executable shell script named `name` into `dir`
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// adb that prints `listing` for `devices -l` and answers getprop with
/// 34 for pixel7, 28 for oldphone, and fails for anything else
pub fn fake_adb(dir: &Path, listing: &str) -> PathBuf {
    let body = format!(
        r#"case "$1" in
  devices)
    cat <<'LISTING'
{listing}LISTING
    ;;
  -s)
    case "$2" in
      pixel7) echo 34 ;;
      oldphone) echo 28 ;;
      *) echo "error: closed" >&2; exit 1 ;;
    esac
    ;;
  *) exit 1 ;;
esac"#
    );
    write_script(dir, "adb", &body)
}

/// adb whose `devices` call always fails
pub fn broken_adb(dir: &Path) -> PathBuf {
    write_script(dir, "adb", "echo 'cannot connect to daemon' >&2\nexit 1")
}

/// scrcpy that records its arguments, one per line, and exits with `code`
pub fn fake_scrcpy(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
    let record = dir.join("scrcpy-args.txt");
    let body = format!(
        "printf '%s\\n' \"$@\" > '{}'\nexit {}",
        record.display(),
        code
    );
    (write_script(dir, "scrcpy", &body), record)
}

/// Arguments recorded by [`fake_scrcpy`]
pub fn recorded_args(record: &Path) -> Vec<String> {
    fs::read_to_string(record)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}
