//! Topic file access

mod loader;

pub use loader::{TopicFileLoader, TopicLoadError};
