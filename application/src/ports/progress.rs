//! Progress notification port
//!
//! Defines the interface for observing a drill session from outside the
//! transcript: lifecycle changes, pass boundaries and emitted pairs.

use drill_domain::SessionState;

/// Callback for progress updates during a drill session
///
/// Implementations live in the presentation layer. Every method has a
/// no-op default so observers only implement what they need.
pub trait DrillProgressNotifier: Send + Sync {
    /// Called on every lifecycle transition
    fn on_state_change(&self, _from: SessionState, _to: SessionState) {}

    /// Called by the orchestrator when a new pass begins (1-based)
    fn on_pass_start(&self, _pass: u32, _limit: u32) {}

    /// Called once a full question/answer pair has been handed off
    fn on_pair_emitted(&self, _index: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoDrillProgress;

impl DrillProgressNotifier for NoDrillProgress {}
