use super::{request_status_launching, status};
use crate::client::DaemonClient;
use anyhow::Result;
use pomodoro_protocol::Request;

pub async fn execute() -> Result<()> {
    let client = DaemonClient::new();
    let snapshot = request_status_launching(&client, Request::PlayPause).await?;

    match snapshot.session {
        Some(session) if snapshot.is_running() => {
            println!(
                "▶️  {} | {} remaining",
                session.label,
                status::format_remaining(session.time_remaining)
            );
        }
        Some(session) => {
            println!(
                "⏸️  Paused | {} {} remaining",
                session.label,
                status::format_remaining(session.time_remaining)
            );
        }
        None => {
            println!("⚪ No active session");
        }
    }

    Ok(())
}
