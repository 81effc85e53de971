//! Presentation layer for qa-drill
//!
//! This crate contains the CLI definition, the topic summary formatter
//! and the log-based progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
