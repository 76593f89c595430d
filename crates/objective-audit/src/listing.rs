//! Objective listing for levels and their variants.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;
use crate::manifest::{display_value, is_blank, Manifest};

pub const MISSING_OBJECTIVE: &str = "MISSING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// The objective exactly as written on each level or variant.
    #[default]
    Declared,
    /// The objective a player sees: a blank variant objective falls back to
    /// the base level's.
    Effective,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveEntry {
    pub level_id: String,
    pub variant: Option<String>,
    pub text: String,
}

impl fmt::Display for ObjectiveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            None => write!(f, "{}: {}", self.level_id, self.text),
            Some(variant) => write!(f, "  {}: {}", variant, self.text),
        }
    }
}

pub fn list(path: impl AsRef<Path>, mode: ListMode) -> Result<Vec<ObjectiveEntry>, ManifestError> {
    let manifest = Manifest::load(path)?;
    list_objectives(&manifest, mode)
}

/// One entry per level followed by one per variant, in manifest order.
/// Fails when a level's `variants` is not an object of variant objects.
pub fn list_objectives(
    manifest: &Manifest,
    mode: ListMode,
) -> Result<Vec<ObjectiveEntry>, ManifestError> {
    let mut entries = Vec::new();
    for level in &manifest.levels {
        let level_id = level.label().into_owned();
        let base = level.objective();
        entries.push(ObjectiveEntry {
            level_id: level_id.clone(),
            variant: None,
            text: objective_text(base),
        });
        for variant in level.variants()? {
            let own = variant.objective();
            let shown = match mode {
                ListMode::Declared => own,
                ListMode::Effective => own
                    .filter(|value| !is_blank(value))
                    .or_else(|| base.filter(|value| !is_blank(value))),
            };
            entries.push(ObjectiveEntry {
                level_id: level_id.clone(),
                variant: Some(variant.name.clone()),
                text: objective_text(shown),
            });
        }
    }
    Ok(entries)
}

fn objective_text(objective: Option<&Value>) -> String {
    objective.map_or_else(
        || MISSING_OBJECTIVE.to_string(),
        |value| display_value(value).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declared_mode_keeps_empty_strings() {
        let manifest =
            Manifest::from_value(json!({"levels": [{"id": "L1", "objective": ""}]})).unwrap();
        let lines: Vec<_> = list_objectives(&manifest, ListMode::Declared)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, ["L1: "]);
    }

    #[test]
    fn effective_mode_falls_back_to_base_objective() {
        let manifest = Manifest::from_value(json!({"levels": [{
            "id": "L1",
            "objective": "Light the lamp",
            "variants": {
                "easy": {"objective": ""},
                "hard": {"objective": "Light it with one gate"},
                "timed": {}
            }
        }]}))
        .unwrap();
        let lines: Vec<_> = list_objectives(&manifest, ListMode::Effective)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "L1: Light the lamp",
                "  easy: Light the lamp",
                "  hard: Light it with one gate",
                "  timed: Light the lamp",
            ]
        );
    }

    #[test]
    fn effective_mode_without_any_objective_is_missing() {
        let manifest = Manifest::from_value(json!({"levels": [{
            "id": "L1",
            "variants": {"easy": {"objective": null}}
        }]}))
        .unwrap();
        let entries = list_objectives(&manifest, ListMode::Effective).unwrap();
        assert_eq!(entries[1].text, MISSING_OBJECTIVE);
    }

    #[test]
    fn scalar_variant_is_rejected() {
        let manifest = Manifest::from_value(json!({"levels": [{
            "id": "L1",
            "variants": {"easy": "todo"}
        }]}))
        .unwrap();
        let err = list_objectives(&manifest, ListMode::Declared).unwrap_err();
        assert!(matches!(err, ManifestError::Shape { .. }));
    }
}
