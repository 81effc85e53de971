//! Configuration file loading for qa-drill
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QA_DRILL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./drill.toml` or `./.drill.toml`
//! 4. Global: `$XDG_CONFIG_HOME/qa-drill/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileParsingConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
