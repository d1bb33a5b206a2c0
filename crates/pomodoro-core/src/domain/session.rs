use serde::{Deserialize, Serialize};

use super::{Durations, SessionLabel};

/// The active focus or break interval. Replaced, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub label: SessionLabel,
    pub time_remaining: u32,
}

impl Session {
    pub fn start(label: SessionLabel, durations: &Durations) -> Self {
        Self {
            label,
            time_remaining: durations.seconds_for(label),
        }
    }

    pub fn focusing(durations: &Durations) -> Self {
        Self::start(SessionLabel::Focusing, durations)
    }

    /// One second less, stopping at zero.
    pub fn tick(&self) -> Self {
        Self {
            time_remaining: self.time_remaining.saturating_sub(1),
            ..*self
        }
    }

    /// The session that follows this one once its time has elapsed.
    pub fn next(&self, durations: &Durations) -> Self {
        Self::start(self.label.next(), durations)
    }

    pub fn is_elapsed(&self) -> bool {
        self.time_remaining == 0
    }

    /// Elapsed share of the label's full duration, from 0 to 100.
    pub fn progress_percent(&self, durations: &Durations) -> f64 {
        let total = durations.seconds_for(self.label);
        if total == 0 {
            return 100.0;
        }
        let elapsed = total.saturating_sub(self.time_remaining);
        (f64::from(elapsed) / f64::from(total) * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusing_session_starts_with_full_focus_duration() {
        let durations = Durations::new(25, 5);
        let session = Session::focusing(&durations);

        assert_eq!(session.label, SessionLabel::Focusing);
        assert_eq!(session.time_remaining, 1500);
        assert!(!session.is_elapsed());
    }

    #[test]
    fn tick_counts_down_and_stops_at_zero() {
        let session = Session {
            label: SessionLabel::OnBreak,
            time_remaining: 1,
        };

        let ticked = session.tick();
        assert_eq!(ticked.time_remaining, 0);
        assert_eq!(ticked.label, SessionLabel::OnBreak);
        assert!(ticked.is_elapsed());

        assert_eq!(ticked.tick().time_remaining, 0);
    }

    #[test]
    fn next_switches_label_and_resets_remaining_time() {
        let durations = Durations::new(30, 7);
        let focusing = Session::focusing(&durations);

        let on_break = focusing.next(&durations);
        assert_eq!(on_break.label, SessionLabel::OnBreak);
        assert_eq!(on_break.time_remaining, 420);

        let focusing_again = on_break.next(&durations);
        assert_eq!(focusing_again.label, SessionLabel::Focusing);
        assert_eq!(focusing_again.time_remaining, 1800);
    }

    #[test]
    fn progress_reflects_elapsed_share() {
        let durations = Durations::new(25, 5);

        let fresh = Session::focusing(&durations);
        assert_eq!(fresh.progress_percent(&durations), 0.0);

        let halfway = Session {
            label: SessionLabel::OnBreak,
            time_remaining: 150,
        };
        assert_eq!(halfway.progress_percent(&durations), 50.0);

        let done = Session {
            label: SessionLabel::Focusing,
            time_remaining: 0,
        };
        assert_eq!(done.progress_percent(&durations), 100.0);
    }
}
