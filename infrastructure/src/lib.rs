//! Infrastructure layer for qa-drill
//!
//! This crate contains the adapters that touch the file system:
//! configuration file loading and topic file loading.

pub mod config;
pub mod topics;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileParsingConfig,
    FileSessionConfig,
};
pub use topics::{TopicFileLoader, TopicLoadError};
