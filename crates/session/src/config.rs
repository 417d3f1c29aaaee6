use std::time::Duration;

use thiserror::Error;

/// Shortest allowed delay between auto-played steps, in seconds.
pub const MIN_STEP_DELAY_SECS: f64 = 0.1;

/// Longest allowed delay between auto-played steps, in seconds.
pub const MAX_STEP_DELAY_SECS: f64 = 2.0;

/// Delay used by [`Config::default`], in seconds.
pub const DEFAULT_STEP_DELAY_SECS: f64 = 1.0;

/// Playback configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_delay_secs: f64,
}

/// Errors that can occur when validating a playback config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_delay_secs must be finite and within 0.1..=2.0")]
    StepDelay,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay_secs: DEFAULT_STEP_DELAY_SECS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step delay.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_delay_secs` is non-finite or outside
    /// `MIN_STEP_DELAY_SECS..=MAX_STEP_DELAY_SECS`.
    pub fn new(step_delay_secs: f64) -> Result<Self, ConfigError> {
        if !step_delay_secs.is_finite()
            || !(MIN_STEP_DELAY_SECS..=MAX_STEP_DELAY_SECS).contains(&step_delay_secs)
        {
            return Err(ConfigError::StepDelay);
        }

        Ok(Self { step_delay_secs })
    }

    /// Returns the delay between auto-played steps, in seconds.
    #[must_use]
    pub fn step_delay_secs(&self) -> f64 {
        self.step_delay_secs
    }

    /// Returns the delay between auto-played steps.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_secs_f64(self.step_delay_secs)
    }
}
