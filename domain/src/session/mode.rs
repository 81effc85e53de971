//! Drill mode definitions.
//!
//! [`DrillMode`] decides how the next question is chosen:
//! - Linear: file order, wrapping around at the end of each pass
//! - Random: a uniformly drawn index on every iteration
//! - Summary: no drill at all, only list the available subsections

use serde::{Deserialize, Serialize};
use std::fmt;

/// How questions are selected during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    /// Questions in the same order as the file
    Linear,
    /// Questions in a random order
    #[default]
    Random,
    /// Only list the subsections of the file
    Summary,
}

impl DrillMode {
    /// Check if this mode runs a drill session at all
    pub fn is_drill(&self) -> bool {
        !self.is_summary()
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, DrillMode::Summary)
    }
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillMode::Linear => write!(f, "linear"),
            DrillMode::Random => write!(f, "random"),
            DrillMode::Summary => write!(f, "summary"),
        }
    }
}

impl std::str::FromStr for DrillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "l" => Ok(DrillMode::Linear),
            "random" | "r" => Ok(DrillMode::Random),
            "summary" | "s" => Ok(DrillMode::Summary),
            _ => Err(format!("Invalid DrillMode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_random() {
        assert_eq!(DrillMode::default(), DrillMode::Random);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("linear".parse::<DrillMode>().unwrap(), DrillMode::Linear);
        assert_eq!("RANDOM".parse::<DrillMode>().unwrap(), DrillMode::Random);
        assert_eq!("s".parse::<DrillMode>().unwrap(), DrillMode::Summary);
        assert!("sideways".parse::<DrillMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [DrillMode::Linear, DrillMode::Random, DrillMode::Summary] {
            assert_eq!(mode.to_string().parse::<DrillMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_is_drill() {
        assert!(DrillMode::Linear.is_drill());
        assert!(DrillMode::Random.is_drill());
        assert!(!DrillMode::Summary.is_drill());
    }
}
