use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {origin} as JSON")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but does not have the level manifest shape.
    #[error("{path}: expected {expected}")]
    Shape { path: String, expected: &'static str },
    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("invalid vague phrase {phrase:?}: {message}")]
    Phrase { phrase: String, message: String },
}

impl ManifestError {
    pub(crate) fn shape(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
        }
    }

    /// True when the error means the manifest file itself is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
