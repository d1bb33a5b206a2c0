use crate::client::DaemonClient;
use anyhow::{anyhow, Context, Result};
use pomodoro_protocol::{Request, Response};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::time::{sleep, timeout};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);
const PING_INTERVAL: Duration = Duration::from_millis(100);
const DAEMON_PATH_ENV: &str = "POMODORO_DAEMON_PATH";
const DAEMON_BINARY: &str = if cfg!(windows) {
    "pomodoro-daemon.exe"
} else {
    "pomodoro-daemon"
};

/// Spawns a detached daemon and returns once it answers a ping.
pub async fn start_daemon() -> Result<()> {
    println!("🔄 Starting the pomodoro daemon...");

    let binary = locate_daemon(
        std::env::var_os(DAEMON_PATH_ENV).map(PathBuf::from),
        std::env::current_exe().ok().as_deref(),
    )?;

    Command::new(&binary)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("cannot launch {}", binary.display()))?;

    timeout(STARTUP_TIMEOUT, until_daemon_answers())
        .await
        .map_err(|_| {
            anyhow!(
                "the daemon did not answer within {} seconds",
                STARTUP_TIMEOUT.as_secs()
            )
        })
}

/// Explicit override first, then a binary next to this one, then `$PATH`.
fn locate_daemon(override_path: Option<PathBuf>, current_exe: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    current_exe
        .and_then(Path::parent)
        .map(|dir| dir.join(DAEMON_BINARY))
        .filter(|sibling| sibling.exists())
        .or_else(|| which::which(DAEMON_BINARY).ok())
        .with_context(|| {
            format!(
                "{} not found; install it next to `pomodoro` or set {}",
                DAEMON_BINARY, DAEMON_PATH_ENV
            )
        })
}

async fn until_daemon_answers() {
    let client = DaemonClient::new().with_timeout(PING_INTERVAL);
    loop {
        if let Ok(Response::Pong) = client.send(Request::Ping).await {
            return;
        }
        sleep(PING_INTERVAL).await;
    }
}
