//! Session configuration.
//!
//! A single immutable value built once per session and handed to every
//! component that needs it. There is no process-wide configuration state.

use drill_domain::DrillMode;
use std::time::Duration;

/// Default pause between a question and its answer
pub const DEFAULT_WAIT: Duration = Duration::from_secs(2);

/// Parameters of one drill session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Wait for an acknowledgement line instead of a fixed delay
    pub interactive: bool,
    /// Delay between question and answer when not interactive
    pub wait: Duration,
    /// Question selection
    pub mode: DrillMode,
    /// Present answers first and reveal the questions
    pub reversed: bool,
    /// Number of full passes over the set
    pub limit: u32,
    /// Colour the loop banner
    pub color: bool,
    /// Seed for random selection; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interactive: false,
            wait: DEFAULT_WAIT,
            mode: DrillMode::default(),
            reversed: false,
            limit: 1,
            color: true,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Set the wait from a number of milliseconds
    pub fn with_wait_millis(self, millis: u64) -> Self {
        self.with_wait(Duration::from_millis(millis))
    }

    pub fn with_mode(mut self, mode: DrillMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(!config.interactive);
        assert_eq!(config.wait, Duration::from_secs(2));
        assert_eq!(config.mode, DrillMode::Random);
        assert_eq!(config.limit, 1);
        assert!(!config.reversed);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_interactive(true)
            .with_wait_millis(1500)
            .with_mode(DrillMode::Linear)
            .with_reversed(true)
            .with_limit(10);

        assert!(config.interactive);
        assert_eq!(config.wait, Duration::from_millis(1500));
        assert_eq!(config.mode, DrillMode::Linear);
        assert!(config.reversed);
        assert_eq!(config.limit, 10);
    }
}
