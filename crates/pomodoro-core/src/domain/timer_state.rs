use serde::{Deserialize, Serialize};

use super::{DurationAdjustment, Durations, Session, SessionLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Focusing,
    OnBreak,
}

/// Which controls a view may offer. Derived from the state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub durations_enabled: bool,
    pub stop_enabled: bool,
    pub running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed.
    Ignored,
    Counted,
    /// The previous session elapsed and one with this label began. Callers sound the alert.
    SessionChanged(SessionLabel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    durations: Durations,
    session: Option<Session>,
    running: bool,
}

impl TimerState {
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            session: None,
            running: false,
        }
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn session(&self) -> Option<Session> {
        self.session
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        Self::phase_of(self.session)
    }

    pub(crate) fn phase_of(session: Option<Session>) -> Phase {
        match session.map(|session| session.label) {
            None => Phase::Idle,
            Some(SessionLabel::Focusing) => Phase::Focusing,
            Some(SessionLabel::OnBreak) => Phase::OnBreak,
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            durations_enabled: self.session.is_none(),
            stop_enabled: self.session.is_some(),
            running: self.running,
        }
    }

    /// Starts a focus session from idle, otherwise pauses or resumes the
    /// current one without touching it.
    pub fn play_pause(self) -> Self {
        let running = !self.running;
        let session = match self.session {
            None if running => Some(Session::focusing(&self.durations)),
            current => current,
        };

        Self {
            session,
            running,
            ..self
        }
    }

    pub fn tick(self) -> (Self, TickOutcome) {
        let session = match self.session {
            Some(session) if self.running => session,
            _ => return (self, TickOutcome::Ignored),
        };

        if session.is_elapsed() {
            let next = session.next(&self.durations);
            let state = Self {
                session: Some(next),
                ..self
            };
            return (state, TickOutcome::SessionChanged(next.label));
        }

        let state = Self {
            session: Some(session.tick()),
            ..self
        };
        (state, TickOutcome::Counted)
    }

    pub fn stop(self) -> Self {
        Self {
            session: None,
            running: false,
            ..self
        }
    }

    /// Applies a duration change only while the duration controls are
    /// enabled, i.e. when no session exists.
    pub fn adjust(self, adjustment: DurationAdjustment) -> Self {
        if !self.controls().durations_enabled {
            return self;
        }

        Self {
            durations: self.durations.adjust(adjustment),
            ..self
        }
    }
}
