//! Progress reporting for drill execution
//!
//! The transcript owns stdout, so progress goes to the log instead.

use drill_application::DrillProgressNotifier;
use drill_domain::SessionState;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use tracing::{debug, info};

/// Reports session progress through `tracing`
#[derive(Default)]
pub struct ProgressReporter {
    pairs: AtomicUsize,
    passes: AtomicU32,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs handed to the publisher so far
    pub fn pairs_seen(&self) -> usize {
        self.pairs.load(Ordering::Relaxed)
    }

    /// Passes started so far
    pub fn passes_seen(&self) -> u32 {
        self.passes.load(Ordering::Relaxed)
    }
}

impl DrillProgressNotifier for ProgressReporter {
    fn on_state_change(&self, from: SessionState, to: SessionState) {
        match to {
            SessionState::Running => info!("Drill session started"),
            SessionState::Stopped => info!(
                "Drill session stopped after {} pair(s)",
                self.pairs_seen()
            ),
            _ => debug!("Session state {} -> {}", from, to),
        }
    }

    fn on_pass_start(&self, pass: u32, limit: u32) {
        self.passes.store(pass, Ordering::Relaxed);
        debug!("Pass {}/{} started", pass, limit);
    }

    fn on_pair_emitted(&self, index: usize) {
        self.pairs.fetch_add(1, Ordering::Relaxed);
        debug!("Pair {} emitted", index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_pairs_and_passes() {
        let reporter = ProgressReporter::new();
        reporter.on_state_change(SessionState::Idle, SessionState::Running);
        reporter.on_pass_start(1, 2);
        reporter.on_pair_emitted(0);
        reporter.on_pair_emitted(1);
        reporter.on_pass_start(2, 2);
        reporter.on_pair_emitted(1);
        reporter.on_state_change(SessionState::Draining, SessionState::Stopped);

        assert_eq!(reporter.pairs_seen(), 3);
        assert_eq!(reporter.passes_seen(), 2);
    }
}
