//! Drill session values shared by the orchestrator and its workers.

pub mod message;
pub mod mode;
pub mod state;
