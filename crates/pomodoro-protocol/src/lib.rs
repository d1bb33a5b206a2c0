//! Pomodoro protocol definitions for CLI-daemon communication
//!
//! This crate defines the IPC protocol between the pomodoro CLI and daemon.
//! Every message is a bincode payload preceded by its length as a
//! little-endian `u32`. One request and one response per connection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod frame;

pub use frame::{read_frame, write_frame, FrameError};
pub use pomodoro_core::{DurationAdjustment, TimerSnapshot};

/// Largest payload either side accepts.
pub const MAX_FRAME_BYTES: usize = 64 * 1024;

pub const SOCKET_ENV: &str = "POMODORO_SOCKET";

/// Requests sent from CLI to daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// Start a focus session from idle, or pause/resume the current one
    PlayPause,
    /// Drop the current session and return to idle
    Stop,
    /// Change the focus or break duration (ignored while a session exists)
    AdjustDuration(DurationAdjustment),
    /// Get the current timer snapshot
    GetStatus,
    /// Ping the daemon to check if it's alive
    Ping,
    /// Ask the daemon to exit
    Shutdown,
}

/// Responses sent from daemon to CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// Timer state after the request was applied
    Status(TimerSnapshot),
    /// Reply to `Stop`: whether a session was running or paused beforehand
    Stopped {
        was_active: bool,
        status: TimerSnapshot,
    },
    /// Generic success acknowledgment
    Ok,
    /// Error response with message
    Error { message: String },
    /// Pong response to ping
    Pong,
}

/// Where the daemon listens. `POMODORO_SOCKET` overrides the default.
pub fn socket_path() -> PathBuf {
    match std::env::var_os(SOCKET_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_socket_path(),
    }
}

#[cfg(unix)]
fn default_socket_path() -> PathBuf {
    let runtime_dir = std::env::var_os("XDG_RUNTIME_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let uid = unsafe { libc::getuid() };
            PathBuf::from(format!("/run/user/{}", uid))
        });
    runtime_dir.join("pomodoro.sock")
}

#[cfg(windows)]
fn default_socket_path() -> PathBuf {
    let local_app_data = std::env::var("LOCALAPPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(format!(r"{}\pomodoro\pomodoro.sock", local_app_data))
}
