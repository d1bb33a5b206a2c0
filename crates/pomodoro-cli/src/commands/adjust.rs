use super::request_status_launching;
use crate::client::DaemonClient;
use anyhow::Result;
use clap::ValueEnum;
use pomodoro_protocol::{DurationAdjustment, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    Focus,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

pub async fn execute(kind: DurationKind, direction: Direction) -> Result<()> {
    let client = DaemonClient::new();
    let snapshot =
        request_status_launching(&client, Request::AdjustDuration(adjustment(kind, direction)))
            .await?;

    if !snapshot.controls.durations_enabled {
        println!("🔒 Durations are locked while a session exists");
        println!("   Run `pomodoro stop` first");
        return Ok(());
    }

    match kind {
        DurationKind::Focus => {
            println!("🍅 Focus duration: {} min", snapshot.durations.focus_minutes());
        }
        DurationKind::Break => {
            println!("☕ Break duration: {} min", snapshot.durations.break_minutes());
        }
    }

    Ok(())
}

fn adjustment(kind: DurationKind, direction: Direction) -> DurationAdjustment {
    match (kind, direction) {
        (DurationKind::Focus, Direction::Up) => DurationAdjustment::IncreaseFocus,
        (DurationKind::Focus, Direction::Down) => DurationAdjustment::DecreaseFocus,
        (DurationKind::Break, Direction::Up) => DurationAdjustment::IncreaseBreak,
        (DurationKind::Break, Direction::Down) => DurationAdjustment::DecreaseBreak,
    }
}
