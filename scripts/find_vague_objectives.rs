//! Objective scanner binary.
//!
//! Prints a coarse phrase pre-check over the raw manifest text, then one line
//! per empty or vague objective found while walking the parsed levels. With
//! no arguments it scans `story/levels-manifest.json` for the built-in
//! phrases.
//!
//! Offending values print as they appear in the manifest: strings verbatim,
//! anything else as compact JSON. A `null` or `false` objective therefore
//! shows as `'null'` or `'false'`, not as a Python-style `None` or `False`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use objective_audit::{scan_manifest, AuditConfig, ManifestSource};
use tracing::debug;

#[path = "common/mod.rs"]
mod common;

use common::init_tracing;

#[derive(Debug, Parser)]
#[command(author, version, about = "Report empty and vague level objectives")]
struct Args {
    /// Manifest to scan. Overrides `manifest_path` from --config.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// TOML file with `manifest_path` and `vague_phrases` keys.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Phrase to flag. Repeat to replace the built-in set.
    #[arg(long = "phrase", value_name = "TEXT")]
    phrases: Vec<String>,

    /// Exit non-zero when any finding is reported.
    #[arg(long)]
    strict: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<()> {
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };
    if let Some(manifest) = args.manifest {
        config.manifest_path = manifest;
    }
    if !args.phrases.is_empty() {
        config.vague_phrases = args.phrases;
    }
    let phrases = config.phrases().context("building vague phrase set")?;
    let path = &config.manifest_path;
    debug!(
        manifest = %path.display(),
        phrases = ?phrases.iter().collect::<Vec<_>>(),
        "starting objective scan"
    );

    let mut out = io::stdout().lock();
    let source = match ManifestSource::read(path) {
        Ok(source) => source,
        Err(err) if err.is_not_found() => {
            writeln!(out, "File not found: {}", path.display())?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    for presence in phrases.presence(source.text()) {
        writeln!(out, "{presence}")?;
    }

    let manifest = source.parse()?;
    let findings = scan_manifest(&manifest, &phrases);
    for finding in &findings {
        writeln!(out, "{finding}")?;
    }
    writeln!(out, "{} finding(s)", findings.len())?;
    out.flush().context("flushing report")?;

    if args.strict && !findings.is_empty() {
        bail!(
            "{} objective finding(s) in {}",
            findings.len(),
            path.display()
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
