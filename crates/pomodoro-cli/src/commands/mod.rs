mod adjust;
mod play;
mod shutdown;
mod status;
mod stop;
mod watch;

pub use adjust::{execute as adjust, Direction, DurationKind};
pub use play::execute as play;
pub use shutdown::execute as shutdown;
pub use status::execute as status;
pub use stop::execute as stop;
pub use watch::execute as watch;

use crate::client::{ClientError, DaemonClient};
use crate::daemon_launcher;
use anyhow::{bail, Result};
use pomodoro_protocol::{Request, Response, TimerSnapshot};

/// Exits with a hint when the daemon is not running.
async fn send_request(client: &DaemonClient, request: Request) -> Result<Response> {
    match client.send(request).await {
        Ok(response) => Ok(response),
        Err(ClientError::DaemonNotRunning) => {
            eprintln!("⚫ The pomodoro daemon is not running");
            eprintln!("   Start it with: pomodoro play");
            std::process::exit(1);
        }
        Err(ClientError::Timeout) => {
            bail!("timed out connecting to the daemon");
        }
        Err(error) => {
            bail!("{}", error);
        }
    }
}

/// Sends a request that answers with a snapshot.
async fn request_status(client: &DaemonClient, request: Request) -> Result<TimerSnapshot> {
    expect_status(send_request(client, request).await?)
}

/// Like [`request_status`], but launches the daemon first when needed.
async fn request_status_launching(
    client: &DaemonClient,
    request: Request,
) -> Result<TimerSnapshot> {
    match client.send(request.clone()).await {
        Ok(response) => expect_status(response),
        Err(ClientError::DaemonNotRunning) => {
            daemon_launcher::start_daemon().await?;
            request_status(client, request).await
        }
        Err(ClientError::Timeout) => {
            bail!("timed out connecting to the daemon");
        }
        Err(error) => {
            bail!("{}", error);
        }
    }
}

fn expect_status(response: Response) -> Result<TimerSnapshot> {
    match response {
        Response::Status(snapshot) => Ok(snapshot),
        Response::Error { message } => bail!("{}", message),
        other => bail!("unexpected response from the daemon: {:?}", other),
    }
}
