//! Lists the objective of every level and variant in manifest order.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use objective_audit::{list, AuditConfig, ListMode};
use tracing::debug;

#[path = "common/mod.rs"]
mod common;

use common::init_tracing;

#[derive(Debug, Parser)]
#[command(author, version, about = "List level and variant objectives")]
struct Args {
    /// Manifest to read. Overrides `manifest_path` from --config.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// TOML file with a `manifest_path` key.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what players see: blank variant objectives inherit the level's.
    #[arg(long)]
    effective: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<()> {
    init_tracing(args.verbose);

    let manifest_path = match (args.manifest, &args.config) {
        (Some(path), _) => path,
        (None, Some(config)) => AuditConfig::load(config)?.manifest_path,
        (None, None) => AuditConfig::default().manifest_path,
    };
    let mode = if args.effective {
        ListMode::Effective
    } else {
        ListMode::Declared
    };
    debug!(manifest = %manifest_path.display(), ?mode, "listing objectives");

    let entries = list(&manifest_path, mode)
        .with_context(|| format!("listing objectives from {}", manifest_path.display()))?;

    let mut out = io::stdout().lock();
    for entry in &entries {
        writeln!(out, "{entry}")?;
    }
    out.flush().context("flushing listing")?;
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
