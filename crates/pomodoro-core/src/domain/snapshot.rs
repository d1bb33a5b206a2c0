use serde::{Deserialize, Serialize};

use super::{Controls, Durations, Phase, Session, TimerState};

/// What observers see of the timer: shared with subscribers and IPC clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub durations: Durations,
    pub session: Option<Session>,
    pub controls: Controls,
}

impl TimerSnapshot {
    pub fn is_running(&self) -> bool {
        self.controls.running
    }

    pub fn phase(&self) -> Phase {
        TimerState::phase_of(self.session)
    }

    pub fn progress_percent(&self) -> Option<f64> {
        self.session
            .map(|session| session.progress_percent(&self.durations))
    }
}

impl From<&TimerState> for TimerSnapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            durations: state.durations(),
            session: state.session(),
            controls: state.controls(),
        }
    }
}
