//! Drill session lifecycle.
//!
//! ```text
//! Idle ──(workers spawned)──▶ Running ──(inbound channels closed)──▶ Draining ──(3 workers joined)──▶ Stopped
//! ```

use std::fmt;

/// Lifecycle state of a drill session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Channels built, workers not started
    #[default]
    Idle,
    /// Orchestrator emitting, relays forwarding, publisher formatting
    Running,
    /// Orchestrator has closed its channels; workers are finishing
    Draining,
    /// Every worker has returned
    Stopped,
}

impl SessionState {
    /// Whether `next` is the state that directly follows this one
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        matches!(
            (self, next),
            (SessionState::Idle, SessionState::Running)
                | (SessionState::Running, SessionState::Draining)
                | (SessionState::Draining, SessionState::Stopped)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Draining => "draining",
            SessionState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
