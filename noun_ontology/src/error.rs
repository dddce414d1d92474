//! Errors raised while loading ontology data from disk.

use std::path::PathBuf;

/// Failures of the ontology loaders. The in-memory store itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ontology JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

impl OntologyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OntologyError::Io {
            path: path.into(),
            source,
        }
    }
}
