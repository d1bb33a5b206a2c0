use super::{request_status, status};
use crate::client::DaemonClient;
use anyhow::Result;
use pomodoro_protocol::Request;
use std::io::Write;
use std::time::Duration;

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

pub async fn execute() -> Result<()> {
    let client = DaemonClient::new().with_timeout(REFRESH_INTERVAL * 2);
    let mut refresh = tokio::time::interval(REFRESH_INTERVAL);
    let mut stdout = std::io::stdout();
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    loop {
        tokio::select! {
            _ = refresh.tick() => {
                let snapshot = request_status(&client, Request::GetStatus).await?;
                write!(stdout, "\r\x1b[2K{}", status::status_line(&snapshot))?;
                stdout.flush()?;
            }
            _ = &mut interrupted => {
                writeln!(stdout)?;
                break;
            }
        }
    }

    Ok(())
}
