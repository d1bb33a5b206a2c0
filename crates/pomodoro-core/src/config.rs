use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::domain::{Durations, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read error: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("TOML parse error: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub timer: TimerConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub sound_enabled: bool,
    pub sound_name: String,
    pub urgency: NotificationUrgency,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationUrgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            tick_millis: 1000,
        }
    }
}

impl TimerConfig {
    /// Configured starting durations, brought within the adjustable bounds.
    pub fn durations(&self) -> Durations {
        Durations::new(self.focus_minutes, self.break_minutes)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound_enabled: true,
            sound_name: "alarm-clock-elapsed".to_string(),
            urgency: NotificationUrgency::Normal,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomodoro")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = Config::default();

        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.tick_interval(), Duration::from_secs(1));
        assert!(config.notifications.enabled);
        assert!(config.notifications.sound_enabled);
        assert_eq!(config.notifications.sound_name, "alarm-clock-elapsed");
        assert!(matches!(
            config.notifications.urgency,
            NotificationUrgency::Normal
        ));
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [timer]
            focus_minutes = 50
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.timer.focus_minutes, 50);
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [timer]
            focus_minutes = 45
            break_minutes = 10
            tick_millis = 250

            [notifications]
            enabled = false
            sound_enabled = false
            sound_name = "bell"
            urgency = "critical"
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.timer.durations(), Durations::new(45, 10));
        assert_eq!(config.timer.tick_interval(), Duration::from_millis(250));
        assert!(!config.notifications.enabled);
        assert!(!config.notifications.sound_enabled);
        assert_eq!(config.notifications.sound_name, "bell");
        assert!(matches!(
            config.notifications.urgency,
            NotificationUrgency::Critical
        ));
    }

    #[test]
    fn out_of_range_durations_are_clamped() {
        let toml = r#"
            [timer]
            focus_minutes = 120
            break_minutes = 0
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let durations = config.timer.durations();

        assert_eq!(durations.focus_minutes(), 60);
        assert_eq!(durations.break_minutes(), 1);
    }

    #[test]
    fn zero_tick_interval_is_raised_to_one_millisecond() {
        let toml = r#"
            [timer]
            tick_millis = 0
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.timer.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn unknown_urgency_is_a_parse_error() {
        let toml = r#"
            [notifications]
            urgency = "urgent"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("pomodoro-config-does-not-exist.toml");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.timer.focus_minutes, 25);
    }

    #[test]
    fn broken_file_reports_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "pomodoro-broken-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[timer\nfocus_minutes = ").unwrap();

        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
