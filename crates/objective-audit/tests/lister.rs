use std::path::PathBuf;

use objective_audit::{list, list_objectives, ListMode, Manifest, MISSING_OBJECTIVE};
use serde_json::json;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("levels-manifest.json")
}

#[test]
fn fixture_listing_preserves_manifest_order() {
    let entries = list(fixture_path(), ListMode::Declared).expect("fixture should load");
    let lines: Vec<_> = entries.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        [
            "level_01: Connect the battery to the lamp",
            "  easy: Complete the circuit.",
            "  hard: ",
            "level_02: Build complex logic to win",
            "index_2: MISSING",
            "  easy: MISSING",
        ]
    );
}

#[test]
fn variant_entries_carry_their_level_id() {
    let entries = list(fixture_path(), ListMode::Declared).expect("fixture should load");
    let hard = entries
        .iter()
        .find(|entry| entry.variant.as_deref() == Some("hard"))
        .expect("hard variant listed");
    assert_eq!(hard.level_id, "level_01");
    assert_eq!(hard.text, "");
}

#[test]
fn absent_objectives_list_as_missing() {
    let manifest = Manifest::from_value(json!({
        "levels": [{"id": "L1", "variants": {"easy": {}, "hard": {"objective": "Use one gate"}}}]
    }))
    .expect("manifest should parse");
    let texts: Vec<_> = list_objectives(&manifest, ListMode::Declared)
        .expect("variants are objects")
        .into_iter()
        .map(|entry| entry.text)
        .collect();

    assert_eq!(texts, [MISSING_OBJECTIVE, MISSING_OBJECTIVE, "Use one gate"]);
}

#[test]
fn effective_listing_resolves_blank_variants() {
    let entries = list(fixture_path(), ListMode::Effective).expect("fixture should load");
    let lines: Vec<_> = entries.iter().map(ToString::to_string).collect();

    assert_eq!(lines[2], "  hard: Connect the battery to the lamp");
    assert_eq!(lines[5], "  easy: MISSING");
}

#[test]
fn listing_is_stable_across_runs() {
    let first = list(fixture_path(), ListMode::Declared).unwrap();
    let second = list(fixture_path(), ListMode::Declared).unwrap();
    assert_eq!(first, second);
}

#[test]
fn lister_rejects_array_variants() {
    let manifest = Manifest::from_value(json!({
        "levels": [{"id": "L1", "objective": "ok", "variants": [{"objective": ""}]}]
    }))
    .expect("manifest should parse");
    let err = list_objectives(&manifest, ListMode::Declared).unwrap_err();
    assert_eq!(
        err.to_string(),
        "levels[0] > variants: expected an object of named variants"
    );
}
