//! Application layer for qa-drill
//!
//! This crate contains the drill session use case, its port definitions,
//! and the session configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_WAIT, SessionConfig};
pub use ports::{
    acknowledgement::{AcknowledgementSource, LineAcknowledgements, NoAcknowledgements},
    index_picker::{IndexPicker, LinearPicker, RandomPicker, picker_for},
    progress::{DrillProgressNotifier, NoDrillProgress},
};
pub use use_cases::run_drill::{
    DrillError, DrillReport, DrillSession, PublisherReport, SessionOutput,
};
