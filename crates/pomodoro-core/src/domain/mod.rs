mod durations;
mod session;
mod session_label;
mod snapshot;
mod timer_state;

pub use durations::{
    DurationAdjustment, Durations, BREAK_MAX_MINUTES, BREAK_MIN_MINUTES, BREAK_STEP_MINUTES,
    DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, FOCUS_MAX_MINUTES, FOCUS_MIN_MINUTES,
    FOCUS_STEP_MINUTES,
};
pub use session::Session;
pub use session_label::SessionLabel;
pub use snapshot::TimerSnapshot;
pub use timer_state::{Controls, Phase, TickOutcome, TimerState};
