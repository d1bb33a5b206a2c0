//! Pomodoro core library
//!
//! Contains the timer domain types, the pure state transitions that drive
//! them, and configuration loading. This crate has no knowledge of
//! scheduling, IPC or notifications.

pub mod config;
pub mod domain;

pub use config::{Config, ConfigError, NotificationConfig, NotificationUrgency, TimerConfig};
pub use domain::{
    Controls, DurationAdjustment, Durations, Phase, Session, SessionLabel, TickOutcome,
    TimerSnapshot, TimerState,
};
