//! Audit configuration, optionally read from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ManifestError;
use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::phrases::{VaguePhrases, DEFAULT_VAGUE_PHRASES};

/// Keys left out of the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    pub manifest_path: PathBuf,
    pub vague_phrases: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            vague_phrases: DEFAULT_VAGUE_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
        }
    }
}

impl AuditConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| ManifestError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|err| ManifestError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.validate().map_err(|err| ManifestError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        self.phrases().map(|_| ())
    }

    pub fn phrases(&self) -> Result<VaguePhrases, ManifestError> {
        VaguePhrases::new(self.vague_phrases.iter().cloned())
    }
}
