//! Topic file loader
//!
//! Reads a sectioned question file from disk and parses it with the domain
//! parser.

use drill_domain::{Topic, TopicParsingParameters, parse_topic};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading a topic file
#[derive(Debug, Error)]
pub enum TopicLoadError {
    #[error("Open of the source file {path} failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads topics from files on disk
#[derive(Debug, Clone, Default)]
pub struct TopicFileLoader {
    params: TopicParsingParameters,
}

impl TopicFileLoader {
    pub fn new(params: TopicParsingParameters) -> Self {
        Self { params }
    }

    /// Read and parse `path`
    pub async fn load(&self, path: &Path) -> Result<Topic, TopicLoadError> {
        debug!("Reading topic file {}", path.display());
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TopicLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let topic = parse_topic(&text, &self.params);
        if topic.orphaned_entries() > 0 {
            warn!(
                "{} entries in {} appear before any '{}' header and were ignored",
                topic.orphaned_entries(),
                path.display(),
                self.params.announce
            );
        }
        info!(
            "Loaded {} subsection(s) from {}",
            topic.subsection_count(),
            path.display()
        );
        Ok(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_load_parses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topics.txt");
        fs::write(
            &path,
            "### Verbs\nto be;être\nto have;avoir\n\n### Nouns\nhouse;maison\n",
        )
        .unwrap();

        let topic = TopicFileLoader::default().load(&path).await.unwrap();

        assert_eq!(topic.subsection_names(), vec!["Verbs", "Nouns"]);
        assert_eq!(topic.subsection("Verbs").unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_custom_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topics.txt");
        fs::write(&path, "== One\nq|a\n").unwrap();

        let loader = TopicFileLoader::new(TopicParsingParameters::new("== ", "|"));
        let topic = loader.load(&path).await.unwrap();

        assert_eq!(topic.subsection("One").unwrap().entry(0), Some(("q", "a")));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = TopicFileLoader::default().load(&path).await.unwrap_err();
        assert!(matches!(err, TopicLoadError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
