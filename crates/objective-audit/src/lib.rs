//! Data-quality checks for the story level manifest.
//!
//! [`scan`] reports level and variant objectives that are blank or contain a
//! known placeholder phrase; [`list`] prints every objective so authors can
//! review them side by side.

pub mod config;
pub mod error;
pub mod listing;
pub mod manifest;
pub mod phrases;
pub mod scan;

pub use config::AuditConfig;
pub use error::ManifestError;
pub use listing::{list, list_objectives, ListMode, ObjectiveEntry, MISSING_OBJECTIVE};
pub use manifest::{Level, Manifest, ManifestSource, Variant, DEFAULT_MANIFEST_PATH};
pub use phrases::{PhrasePresence, VaguePhrases, DEFAULT_VAGUE_PHRASES};
pub use scan::{scan, scan_manifest, Finding, FindingKind, ScanReport};
