use crate::domain::ports::MAX_HISTORY;
use crate::domain::services::DEFAULT_SUMMARY_WINDOW;
use crate::domain::value_objects::TimeWindow;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP settings
    pub listen_addr: String,
    pub debug: bool,

    // Engine settings
    pub history_capacity: usize,
    pub summary_window: usize,
    pub default_window_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8090".to_string(),
            debug: false,
            history_capacity: MAX_HISTORY,
            summary_window: DEFAULT_SUMMARY_WINDOW,
            default_window_minutes: 5,
        }
    }
}

impl Config {
    /// Build a config from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = lookup("SIGNAL_METRICS_LISTEN_ADDR").unwrap_or(defaults.listen_addr);

        let history_capacity = lookup("SIGNAL_METRICS_HISTORY_CAPACITY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.history_capacity);

        let summary_window = lookup("SIGNAL_METRICS_SUMMARY_WINDOW")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.summary_window);

        let default_window_minutes = lookup("SIGNAL_METRICS_DEFAULT_WINDOW_MINUTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_window_minutes);

        let debug = lookup("DEBUG").is_some();

        Self {
            listen_addr,
            debug,
            history_capacity,
            summary_window,
            default_window_minutes,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.summary_window == 0 {
            return Err(ConfigError::ZeroSummaryWindow);
        }
        Ok(())
    }

    pub fn default_window(&self) -> TimeWindow {
        TimeWindow::minutes(self.default_window_minutes)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("history_capacity must be greater than zero")]
    ZeroCapacity,
    #[error("summary_window must be greater than zero")]
    ZeroSummaryWindow,
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_lookup(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}
