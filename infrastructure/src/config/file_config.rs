//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [session]
//! interactive = false
//! wait_ms = 2000
//! mode = "linear"
//! reversed = false
//! limit = 3
//!
//! [parsing]
//! announce = "### "
//! separator = ";"
//!
//! [output]
//! color = true
//! ```

use drill_application::SessionConfig;
use drill_domain::{DrillMode, TopicParsingParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("limit cannot be 0")]
    InvalidLimit,

    #[error("separator cannot be empty")]
    EmptySeparator,

    #[error("announce prefix cannot be empty")]
    EmptyAnnounce,
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Wait for Return instead of a fixed delay
    pub interactive: bool,
    /// Delay between question and answer, in milliseconds
    pub wait_ms: u64,
    /// Question selection (uses domain type)
    pub mode: DrillMode,
    /// Present answers first
    pub reversed: bool,
    /// Number of passes over the question set
    pub limit: u32,
    /// Seed for random selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        let defaults = SessionConfig::default();
        Self {
            interactive: defaults.interactive,
            wait_ms: u64::try_from(defaults.wait.as_millis()).unwrap_or(u64::MAX),
            mode: defaults.mode,
            reversed: defaults.reversed,
            limit: defaults.limit,
            seed: defaults.seed,
        }
    }
}

/// Raw parsing configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParsingConfig {
    /// Prefix announcing a subsection
    pub announce: String,
    /// Separator between question and answer
    pub separator: String,
}

impl Default for FileParsingConfig {
    fn default() -> Self {
        let defaults = TopicParsingParameters::default();
        Self {
            announce: defaults.announce,
            separator: defaults.separator,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session settings
    pub session: FileSessionConfig,
    /// Topic file parsing settings
    pub parsing: FileParsingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session.limit == 0 {
            return Err(ConfigValidationError::InvalidLimit);
        }
        if self.parsing.separator.is_empty() {
            return Err(ConfigValidationError::EmptySeparator);
        }
        if self.parsing.announce.is_empty() {
            return Err(ConfigValidationError::EmptyAnnounce);
        }
        Ok(())
    }

    /// Session configuration for the application layer
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_interactive(self.session.interactive)
            .with_wait_millis(self.session.wait_ms)
            .with_mode(self.session.mode)
            .with_reversed(self.session.reversed)
            .with_limit(self.session.limit)
            .with_color(self.output.color)
            .with_seed(self.session.seed)
    }

    /// Topic parsing parameters for the domain parser
    pub fn parsing_parameters(&self) -> TopicParsingParameters {
        TopicParsingParameters::new(&self.parsing.announce, &self.parsing.separator)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
