use crate::client::{ClientError, DaemonClient};
use anyhow::{bail, Result};
use pomodoro_protocol::{Request, Response};

pub async fn execute() -> Result<()> {
    let client = DaemonClient::new();

    match client.send(Request::Shutdown).await {
        Ok(Response::Ok) => {
            println!("👋 Pomodoro daemon stopped");
        }
        Ok(Response::Error { message }) => {
            bail!("{}", message);
        }
        Ok(_) => {
            bail!("unexpected response from the daemon");
        }
        Err(ClientError::DaemonNotRunning) => {
            println!("⚫ The pomodoro daemon is not running");
        }
        Err(error) => {
            bail!("{}", error);
        }
    }

    Ok(())
}
