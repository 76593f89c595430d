//! Level manifest model.
//!
//! The manifest is parsed once into [`Manifest`], which checks only the
//! outer shape: a root object with an optional `levels` array of level
//! objects. Each level keeps its full object body, so the scanner can walk
//! `variants` and any other field whatever their shape. [`Level::variants`]
//! applies the stricter named-variant shape the lister needs.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ManifestError;

pub const DEFAULT_MANIFEST_PATH: &str = "story/levels-manifest.json";

pub const OBJECTIVE_KEY: &str = "objective";

/// Raw manifest text, read once and shared by the phrase pre-check and the
/// structured parse.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
    text: String,
}

impl ManifestSource {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read manifest");
        Ok(Self { path, text })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse(&self) -> Result<Manifest, ManifestError> {
        Manifest::from_json(&self.text, &self.path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub levels: Vec<Level>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        ManifestSource::read(path)?.parse()
    }

    /// Parses manifest text; `origin` names the input in error messages.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(text).map_err(|source| ManifestError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        let Value::Object(mut root) = value else {
            return Err(ManifestError::shape("manifest", "a JSON object at the root"));
        };
        let levels = match root.remove("levels") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| Level::from_value(index, entry))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ManifestError::shape("levels", "an array of level objects")),
        };
        debug!(levels = levels.len(), "parsed manifest");
        Ok(Self { levels })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Position of the level in the `levels` array.
    pub index: usize,
    pub id: Option<String>,
    body: Map<String, Value>,
}

impl Level {
    fn from_value(index: usize, value: Value) -> Result<Self, ManifestError> {
        let Value::Object(body) = value else {
            return Err(ManifestError::shape(
                format!("levels[{index}]"),
                "a level object",
            ));
        };

        let id = match body.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(Self { index, id, body })
    }

    /// The level id, or `index_<i>` when the level has none.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match &self.id {
            Some(id) => Cow::Borrowed(id),
            None => Cow::Owned(format!("index_{}", self.index)),
        }
    }

    #[must_use]
    pub fn objective(&self) -> Option<&Value> {
        self.body.get(OBJECTIVE_KEY)
    }

    /// Every field of the level object, in document order.
    #[must_use]
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Named variants, in document order. Unlike the scanner, which walks
    /// `variants` whatever its shape, this requires an object of objects.
    pub fn variants(&self) -> Result<Vec<Variant>, ManifestError> {
        let location = format!("levels[{}]", self.index);
        match self.body.get("variants") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(name, entry)| Variant::from_value(&location, name, entry))
                .collect(),
            Some(_) => Err(ManifestError::shape(
                format!("{location} > variants"),
                "an object of named variants",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    body: Map<String, Value>,
}

impl Variant {
    fn from_value(level: &str, name: &str, value: &Value) -> Result<Self, ManifestError> {
        let Value::Object(body) = value else {
            return Err(ManifestError::shape(
                format!("{level} > variants > {name}"),
                "a variant object",
            ));
        };
        Ok(Self {
            name: name.to_string(),
            body: body.clone(),
        })
    }

    #[must_use]
    pub fn objective(&self) -> Option<&Value> {
        self.body.get(OBJECTIVE_KEY)
    }
}

/// Strings render as their contents, everything else as compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// JSON "falsy" test used for objectives: `null`, `""`, `false`, zero, and
/// empty containers all count as empty.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
