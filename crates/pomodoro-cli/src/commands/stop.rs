use super::send_request;
use crate::client::DaemonClient;
use anyhow::{bail, Result};
use pomodoro_protocol::{Request, Response};

pub async fn execute() -> Result<()> {
    let client = DaemonClient::new();

    if expect_stopped(send_request(&client, Request::Stop).await?)? {
        println!("🛑 Session stopped");
    } else {
        println!("⚪ No active session");
    }

    Ok(())
}

/// Whether the daemon had a session when it processed the stop.
fn expect_stopped(response: Response) -> Result<bool> {
    match response {
        Response::Stopped { was_active, .. } => Ok(was_active),
        Response::Error { message } => bail!("{}", message),
        other => bail!("unexpected response from the daemon: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomodoro_core::TimerState;
    use pomodoro_protocol::TimerSnapshot;

    fn stopped(was_active: bool) -> Response {
        Response::Stopped {
            was_active,
            status: TimerSnapshot::from(&TimerState::default()),
        }
    }

    #[test]
    fn stop_reply_reports_whether_a_session_was_dropped() {
        assert!(expect_stopped(stopped(true)).unwrap());
        assert!(!expect_stopped(stopped(false)).unwrap());
    }

    #[test]
    fn plain_status_is_not_a_stop_reply() {
        let status = Response::Status(TimerSnapshot::from(&TimerState::default()));

        assert!(expect_stopped(status).is_err());
    }
}
