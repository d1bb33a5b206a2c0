use serde::{Deserialize, Serialize};

use super::SessionLabel;

pub const FOCUS_MIN_MINUTES: u32 = 5;
pub const FOCUS_MAX_MINUTES: u32 = 60;
pub const FOCUS_STEP_MINUTES: u32 = 5;
pub const BREAK_MIN_MINUTES: u32 = 1;
pub const BREAK_MAX_MINUTES: u32 = 15;
pub const BREAK_STEP_MINUTES: u32 = 1;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationAdjustment {
    IncreaseFocus,
    DecreaseFocus,
    IncreaseBreak,
    DecreaseBreak,
}

/// Focus and break lengths, in minutes. Always within bounds, including
/// after deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UncheckedDurations")]
pub struct Durations {
    focus_minutes: u32,
    break_minutes: u32,
}

#[derive(Deserialize)]
struct UncheckedDurations {
    focus_minutes: u32,
    break_minutes: u32,
}

impl From<UncheckedDurations> for Durations {
    fn from(raw: UncheckedDurations) -> Self {
        Self::new(raw.focus_minutes, raw.break_minutes)
    }
}

impl Durations {
    /// Builds durations from arbitrary values, clamping both to their bounds
    /// and snapping the focus length down onto its step grid.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        let focus_minutes = focus_minutes.clamp(FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES);
        let focus_minutes = focus_minutes - (focus_minutes % FOCUS_STEP_MINUTES);

        Self {
            focus_minutes,
            break_minutes: break_minutes.clamp(BREAK_MIN_MINUTES, BREAK_MAX_MINUTES),
        }
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn minutes_for(&self, label: SessionLabel) -> u32 {
        match label {
            SessionLabel::Focusing => self.focus_minutes,
            SessionLabel::OnBreak => self.break_minutes,
        }
    }

    pub fn seconds_for(&self, label: SessionLabel) -> u32 {
        self.minutes_for(label) * 60
    }

    pub fn increase_focus(self) -> Self {
        Self {
            focus_minutes: (self.focus_minutes + FOCUS_STEP_MINUTES).min(FOCUS_MAX_MINUTES),
            ..self
        }
    }

    pub fn decrease_focus(self) -> Self {
        Self {
            focus_minutes: self
                .focus_minutes
                .saturating_sub(FOCUS_STEP_MINUTES)
                .max(FOCUS_MIN_MINUTES),
            ..self
        }
    }

    pub fn increase_break(self) -> Self {
        Self {
            break_minutes: (self.break_minutes + BREAK_STEP_MINUTES).min(BREAK_MAX_MINUTES),
            ..self
        }
    }

    pub fn decrease_break(self) -> Self {
        Self {
            break_minutes: self
                .break_minutes
                .saturating_sub(BREAK_STEP_MINUTES)
                .max(BREAK_MIN_MINUTES),
            ..self
        }
    }

    pub fn adjust(self, adjustment: DurationAdjustment) -> Self {
        match adjustment {
            DurationAdjustment::IncreaseFocus => self.increase_focus(),
            DurationAdjustment::DecreaseFocus => self.decrease_focus(),
            DurationAdjustment::IncreaseBreak => self.increase_break(),
            DurationAdjustment::DecreaseBreak => self.decrease_break(),
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_durations_are_clamped() {
        let durations: Durations = toml::from_str("focus_minutes = 999\nbreak_minutes = 0").unwrap();

        assert_eq!(durations, Durations::new(FOCUS_MAX_MINUTES, BREAK_MIN_MINUTES));
    }

    #[test]
    fn deserialized_focus_snaps_onto_the_grid() {
        let durations: Durations = toml::from_str("focus_minutes = 27\nbreak_minutes = 7").unwrap();

        assert_eq!(durations.focus_minutes(), 25);
        assert_eq!(durations.break_minutes(), 7);
    }

    fn every_valid_durations() -> impl Iterator<Item = Durations> {
        (FOCUS_MIN_MINUTES..=FOCUS_MAX_MINUTES)
            .step_by(FOCUS_STEP_MINUTES as usize)
            .flat_map(|focus| {
                (BREAK_MIN_MINUTES..=BREAK_MAX_MINUTES)
                    .map(move |break_minutes| Durations::new(focus, break_minutes))
            })
    }

    #[test]
    fn defaults_are_twenty_five_and_five() {
        let durations = Durations::default();

        assert_eq!(durations.focus_minutes(), 25);
        assert_eq!(durations.break_minutes(), 5);
    }

    #[test]
    fn increase_focus_never_exceeds_sixty() {
        for durations in every_valid_durations() {
            let increased = durations.increase_focus();
            assert!(increased.focus_minutes() <= FOCUS_MAX_MINUTES);
            if durations.focus_minutes() < FOCUS_MAX_MINUTES {
                assert_eq!(increased.focus_minutes(), durations.focus_minutes() + 5);
            }
            assert_eq!(increased.break_minutes(), durations.break_minutes());
        }
    }

    #[test]
    fn decrease_focus_never_goes_below_five() {
        for durations in every_valid_durations() {
            let decreased = durations.decrease_focus();
            assert!(decreased.focus_minutes() >= FOCUS_MIN_MINUTES);
            if durations.focus_minutes() > FOCUS_MIN_MINUTES {
                assert_eq!(decreased.focus_minutes(), durations.focus_minutes() - 5);
            }
        }
    }

    #[test]
    fn increase_break_never_exceeds_fifteen() {
        for durations in every_valid_durations() {
            let increased = durations.increase_break();
            assert!(increased.break_minutes() <= BREAK_MAX_MINUTES);
            if durations.break_minutes() < BREAK_MAX_MINUTES {
                assert_eq!(increased.break_minutes(), durations.break_minutes() + 1);
            }
            assert_eq!(increased.focus_minutes(), durations.focus_minutes());
        }
    }

    #[test]
    fn decrease_break_never_goes_below_one() {
        for durations in every_valid_durations() {
            let decreased = durations.decrease_break();
            assert!(decreased.break_minutes() >= BREAK_MIN_MINUTES);
            if durations.break_minutes() > BREAK_MIN_MINUTES {
                assert_eq!(decreased.break_minutes(), durations.break_minutes() - 1);
            }
        }
    }

    #[test]
    fn repeated_increases_saturate_at_the_bound() {
        let mut durations = Durations::default();
        for _ in 0..20 {
            durations = durations.increase_focus().increase_break();
        }

        assert_eq!(durations.focus_minutes(), 60);
        assert_eq!(durations.break_minutes(), 15);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(Durations::new(0, 0), Durations::new(5, 1));
        assert_eq!(Durations::new(90, 40).focus_minutes(), 60);
        assert_eq!(Durations::new(90, 40).break_minutes(), 15);
    }

    #[test]
    fn new_snaps_focus_onto_five_minute_grid() {
        assert_eq!(Durations::new(27, 5).focus_minutes(), 25);
        assert_eq!(Durations::new(59, 5).focus_minutes(), 55);
        assert_eq!(Durations::new(6, 5).focus_minutes(), 5);
    }

    #[test]
    fn seconds_for_uses_the_matching_duration() {
        let durations = Durations::new(25, 5);

        assert_eq!(durations.seconds_for(SessionLabel::Focusing), 1500);
        assert_eq!(durations.seconds_for(SessionLabel::OnBreak), 300);
    }

    #[test]
    fn adjust_dispatches_to_the_matching_operation() {
        let durations = Durations::default();

        assert_eq!(
            durations.adjust(DurationAdjustment::IncreaseFocus),
            durations.increase_focus()
        );
        assert_eq!(
            durations.adjust(DurationAdjustment::DecreaseBreak),
            durations.decrease_break()
        );
    }
}
