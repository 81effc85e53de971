//! Index selection port
//!
//! The orchestrator asks an [`IndexPicker`] which entry to present next.
//! Keeping this behind a trait lets tests pin the sequence (seeded random
//! or a scripted picker) instead of depending on an ambient generator.

use drill_domain::DrillMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the index of the next question.
pub trait IndexPicker: Send {
    /// Return an index in `[0, count)`. `count` is never 0.
    fn next_index(&mut self, count: usize) -> usize;
}

/// File order: 0, 1, …, count-1, 0, 1, …
#[derive(Debug, Default)]
pub struct LinearPicker {
    next: usize,
}

impl LinearPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexPicker for LinearPicker {
    fn next_index(&mut self, count: usize) -> usize {
        let current = self.next % count;
        self.next = (current + 1) % count;
        current
    }
}

/// Uniform draw in `[0, count)` on every call
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl IndexPicker for RandomPicker {
    fn next_index(&mut self, count: usize) -> usize {
        self.rng.random_range(0..count)
    }
}

/// Build the picker matching a drill mode.
///
/// Summary mode never drills; it gets a linear picker so the function stays
/// total, and the session rejects that mode before any index is drawn.
pub fn picker_for(mode: DrillMode, seed: Option<u64>) -> Box<dyn IndexPicker> {
    match mode {
        DrillMode::Random => match seed {
            Some(seed) => Box::new(RandomPicker::seeded(seed)),
            None => Box::new(RandomPicker::from_os()),
        },
        DrillMode::Linear | DrillMode::Summary => Box::new(LinearPicker::new()),
    }
}
