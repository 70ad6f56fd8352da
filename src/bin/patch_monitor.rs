/*!
 * CLI tool to add the Monitor icon import to WatchContainer.tsx
 *
 * Replaces the import marker in place when present; otherwise prints a skip
 * notice and the lines that mention the diagnostic substring.
 *
 * Usage: cargo run --bin patch_monitor -- [--file PATH] [--first-only]
 */

use std::io::{self, Write};

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing::{error, info};

use phimkhoi_tools::{
    config::PatchConfig,
    errors::AppError,
    patch::{apply_patch, SubstitutionPolicy},
    utils::logging::init_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let matches = Command::new("patch_monitor")
        .about("Add the Monitor import to a source file")
        .arg(
            Arg::new("file")
                .help("File to patch (overrides PATCH_TARGET)")
                .long("file")
                .short('f')
                .value_name("PATH"),
        )
        .arg(
            Arg::new("marker")
                .help("Literal text to look for (overrides PATCH_MARKER)")
                .long("marker")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("replacement")
                .help("Literal text to substitute (overrides PATCH_REPLACEMENT)")
                .long("replacement")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("diagnostic")
                .help("Lines containing this are shown when the marker is missing")
                .long("diagnostic")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("first-only")
                .help("Replace only the first occurrence of the marker")
                .long("first-only")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = PatchConfig::from_env();
    if let Some(file) = matches.get_one::<String>("file") {
        config.target = file.into();
    }
    if let Some(marker) = matches.get_one::<String>("marker") {
        config.marker = marker.clone();
    }
    if let Some(replacement) = matches.get_one::<String>("replacement") {
        config.replacement = replacement.clone();
    }
    if let Some(diagnostic) = matches.get_one::<String>("diagnostic") {
        config.diagnostic = diagnostic.clone();
    }
    if matches.get_flag("first-only") {
        config.policy = SubstitutionPolicy::First;
    }

    info!("📄 Patching {}", config.target.display());

    let outcome = match apply_patch(&config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                "❌ {} ({}, category={:?})",
                e,
                e.error_code(),
                e.error_category()
            );
            if let Some(action) = e.suggested_action() {
                error!("   {}", action);
            }
            return Err(e.into());
        }
    };

    let mut out = io::stdout().lock();
    outcome.print_status(&mut out)?;
    out.flush()?;

    Ok(())
}
