//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that the orchestrator depends on and that
//! tests or outer layers can replace.

pub mod acknowledgement;
pub mod index_picker;
pub mod progress;
