//! Objective scanner.
//!
//! Walks every level of a manifest depth-first, in document order, and
//! records a [`Finding`] for each `objective` field that is blank or contains
//! a vague phrase. Context paths read like `Level: L1 > variants > easy`,
//! with array elements appended as `[i]`.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ManifestError;
use crate::manifest::{display_value, is_blank, Manifest, ManifestSource, OBJECTIVE_KEY};
use crate::phrases::{PhrasePresence, VaguePhrases};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    EmptyObjective,
    VagueObjective { phrase: String },
}

impl FindingKind {
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EmptyObjective => "[EMPTY OBJECTIVE]",
            Self::VagueObjective { .. } => "[VAGUE OBJECTIVE]",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Path to the object that owns the offending `objective`.
    pub context: String,
    pub kind: FindingKind,
    pub value: Value,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | Found: '{}'",
            self.context,
            self.kind.tag(),
            display_value(&self.value)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub presence: Vec<PhrasePresence>,
    pub findings: Vec<Finding>,
}

/// Reads, pre-checks, parses, and scans the manifest at `path`.
pub fn scan(path: impl AsRef<Path>, phrases: &VaguePhrases) -> Result<ScanReport, ManifestError> {
    let source = ManifestSource::read(path)?;
    let presence = phrases.presence(source.text());
    let manifest = source.parse()?;
    Ok(ScanReport {
        presence,
        findings: scan_manifest(&manifest, phrases),
    })
}

#[must_use]
pub fn scan_manifest(manifest: &Manifest, phrases: &VaguePhrases) -> Vec<Finding> {
    let mut findings = Vec::new();
    for level in &manifest.levels {
        let context = format!("Level: {}", level.label());
        let before = findings.len();
        visit_object(level.body(), &context, phrases, &mut findings);
        debug!(
            level = %level.label(),
            findings = findings.len() - before,
            "scanned level"
        );
    }
    info!(
        levels = manifest.levels.len(),
        findings = findings.len(),
        "objective scan complete"
    );
    findings
}

fn visit(value: &Value, context: &str, phrases: &VaguePhrases, findings: &mut Vec<Finding>) {
    match value {
        Value::Object(fields) => visit_object(fields, context, phrases, findings),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(item, &format!("{context}[{index}]"), phrases, findings);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

fn visit_object(
    fields: &Map<String, Value>,
    context: &str,
    phrases: &VaguePhrases,
    findings: &mut Vec<Finding>,
) {
    if let Some(objective) = fields.get(OBJECTIVE_KEY) {
        check_objective(objective, context, phrases, findings);
    }
    for (key, child) in fields {
        if key == OBJECTIVE_KEY {
            continue;
        }
        visit(child, &format!("{context} > {key}"), phrases, findings);
    }
}

fn check_objective(
    objective: &Value,
    context: &str,
    phrases: &VaguePhrases,
    findings: &mut Vec<Finding>,
) {
    if is_blank(objective) {
        findings.push(Finding {
            context: context.to_string(),
            kind: FindingKind::EmptyObjective,
            value: objective.clone(),
        });
    }
    if let Value::String(text) = objective {
        for phrase in phrases.matches_in(text) {
            findings.push(Finding {
                context: context.to_string(),
                kind: FindingKind::VagueObjective {
                    phrase: phrase.to_string(),
                },
                value: objective.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn findings_for(document: Value) -> Vec<String> {
        let manifest = Manifest::from_value(document).unwrap();
        scan_manifest(&manifest, &VaguePhrases::default())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn objective_value_is_not_walked() {
        let lines = findings_for(json!({
            "levels": [{"id": "L1", "objective": {"objective": ""}}]
        }));
        assert!(lines.is_empty());
    }

    #[test]
    fn null_objective_renders_as_json_null() {
        let lines = findings_for(json!({"levels": [{"id": "L1", "objective": null}]}));
        assert_eq!(lines, ["Level: L1 [EMPTY OBJECTIVE] | Found: 'null'"]);
    }

    #[test]
    fn arrays_append_index_without_separator() {
        let lines = findings_for(json!({
            "levels": [{"id": "L1", "objective": "Light the lamp", "steps": [{"objective": "ok"}, {"objective": ""}]}]
        }));
        assert_eq!(lines, ["Level: L1 > steps[1] [EMPTY OBJECTIVE] | Found: ''"]);
    }

    #[test]
    fn each_matching_phrase_is_its_own_finding() {
        let manifest = Manifest::from_value(json!({
            "levels": [{"id": "L1", "objective": "Complete the circuit and build complex logic"}]
        }))
        .unwrap();
        let findings = scan_manifest(&manifest, &VaguePhrases::default());
        let phrases: Vec<_> = findings
            .iter()
            .map(|finding| match &finding.kind {
                FindingKind::VagueObjective { phrase } => phrase.as_str(),
                FindingKind::EmptyObjective => "empty",
            })
            .collect();
        assert_eq!(phrases, ["Build complex logic", "Complete the circuit"]);
    }
}
