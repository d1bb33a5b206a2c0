use super::request_status;
use crate::client::{ClientError, DaemonClient};
use anyhow::Result;
use pomodoro_core::{Phase, SessionLabel};
use pomodoro_protocol::{Request, TimerSnapshot};
use serde::Serialize;
use serde_json::json;

const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Serialize)]
struct StatusOutput {
    phase: &'static str,
    label: Option<String>,
    running: bool,
    remaining_seconds: u32,
    remaining_formatted: String,
    progress_percent: f64,
    focus_minutes: u32,
    break_minutes: u32,
    durations_enabled: bool,
    stop_enabled: bool,
}

impl From<&TimerSnapshot> for StatusOutput {
    fn from(snapshot: &TimerSnapshot) -> Self {
        let remaining_seconds = snapshot.session.map(|s| s.time_remaining).unwrap_or(0);
        Self {
            phase: phase_name(snapshot.phase()),
            label: snapshot.session.map(|s| s.label.to_string()),
            running: snapshot.is_running(),
            remaining_seconds,
            remaining_formatted: format_remaining(remaining_seconds),
            progress_percent: snapshot.progress_percent().unwrap_or(0.0),
            focus_minutes: snapshot.durations.focus_minutes(),
            break_minutes: snapshot.durations.break_minutes(),
            durations_enabled: snapshot.controls.durations_enabled,
            stop_enabled: snapshot.controls.stop_enabled,
        }
    }
}

pub async fn execute(json: bool) -> Result<()> {
    let client = DaemonClient::new();

    if json {
        match client.send(Request::GetStatus).await {
            Ok(response) => {
                let snapshot = super::expect_status(response)?;
                let output = StatusOutput::from(&snapshot);
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Err(error) => {
                println!("{}", error_json(&error));
                if !matches!(error, ClientError::DaemonNotRunning) {
                    std::process::exit(1);
                }
            }
        }
        return Ok(());
    }

    let snapshot = request_status(&client, Request::GetStatus).await?;
    print_formatted(&snapshot);
    Ok(())
}

fn error_json(error: &ClientError) -> serde_json::Value {
    match error {
        ClientError::DaemonNotRunning => json!({"error": "daemon not running", "running": false}),
        other => json!({"error": other.to_string()}),
    }
}

pub fn print_formatted(snapshot: &TimerSnapshot) {
    let durations = format!(
        "focus {} min, break {} min",
        snapshot.durations.focus_minutes(),
        snapshot.durations.break_minutes()
    );

    let Some(session) = snapshot.session else {
        println!("⚪ No active session");
        println!("   Durations: {}", durations);
        return;
    };

    let icon = match (session.label, snapshot.is_running()) {
        (_, false) => "⏸️ ",
        (SessionLabel::Focusing, true) => "🍅",
        (SessionLabel::OnBreak, true) => "☕",
    };
    let state = if snapshot.is_running() {
        "running"
    } else {
        "paused"
    };
    let progress = snapshot.progress_percent().unwrap_or(0.0);

    println!("{} {} ({})", icon, session.label, state);
    println!("   Remaining: {}", format_remaining(session.time_remaining));
    println!(
        "   Progress:  {} {:>3.0}%",
        progress_bar(progress, PROGRESS_BAR_WIDTH),
        progress
    );
    println!("   Durations: {}", durations);
}

/// Single-line rendering for `watch`.
pub fn status_line(snapshot: &TimerSnapshot) -> String {
    match snapshot.session {
        None => format!(
            "Idle | focus {} min, break {} min",
            snapshot.durations.focus_minutes(),
            snapshot.durations.break_minutes()
        ),
        Some(session) => {
            let progress = snapshot.progress_percent().unwrap_or(0.0);
            let paused = if snapshot.is_running() { "" } else { " (paused)" };
            format!(
                "{} {} {} {:>3.0}%{}",
                session.label,
                format_remaining(session.time_remaining),
                progress_bar(progress, PROGRESS_BAR_WIDTH),
                progress,
                paused
            )
        }
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Focusing => "focusing",
        Phase::OnBreak => "on_break",
    }
}

pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
