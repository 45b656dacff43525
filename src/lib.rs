//! scrcpy-launch
//!
//! Lists attached Android devices through `adb` and launches `scrcpy`
//! against one of them with forwarded options.
//!
//! This crate provides the implementation for the `scrcpy-launch` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install scrcpy-launch
//! scrcpy-launch --list-devices
//! scrcpy-launch -s emulator-5554 --max-size 1920 --no-audio
//! ```

pub mod commands;
pub mod device;
pub mod launcher;
pub mod utils;
