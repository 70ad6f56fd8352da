//! One-shot literal substitution on a source file.

use std::io::{self, Write};
use std::str::FromStr;

use tokio::fs;
use tracing::{debug, info};

use crate::config::PatchConfig;
use crate::errors::PatchError;

pub const PATCHED_MESSAGE: &str = "PATCHED: Monitor import added successfully";
pub const SKIPPED_MESSAGE: &str = "SKIP: import already contains Monitor or pattern not found";
pub const DIAGNOSTIC_PREFIX: &str = "Current import line:";

/// How many marker occurrences get replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubstitutionPolicy {
    First,
    #[default]
    All,
}

impl FromStr for SubstitutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(SubstitutionPolicy::First),
            "all" => Ok(SubstitutionPolicy::All),
            other => Err(format!("Unknown substitution policy '{}': expected first or all", other)),
        }
    }
}

/// Result of inspecting file content, before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchPlan {
    Replace { content: String, replacements: usize },
    Skip { diagnostic_lines: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched { replacements: usize },
    Skipped { diagnostic_lines: Vec<String> },
}

impl PatchOutcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, PatchOutcome::Patched { .. })
    }

    pub fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            PatchOutcome::Patched { .. } => writeln!(out, "{}", PATCHED_MESSAGE),
            PatchOutcome::Skipped { diagnostic_lines } => {
                writeln!(out, "{}", SKIPPED_MESSAGE)?;
                for line in diagnostic_lines {
                    writeln!(out, "{} {}", DIAGNOSTIC_PREFIX, line)?;
                }
                Ok(())
            }
        }
    }
}

pub fn plan_patch(content: &str, config: &PatchConfig) -> PatchPlan {
    // An empty marker would match everywhere
    let occurrences = if config.marker.is_empty() {
        0
    } else {
        content.matches(config.marker.as_str()).count()
    };

    if occurrences == 0 {
        let diagnostic_lines = content
            .split('\n')
            .filter(|line| line.contains(config.diagnostic.as_str()))
            .map(str::to_string)
            .collect();
        return PatchPlan::Skip { diagnostic_lines };
    }

    let (content, replacements) = match config.policy {
        SubstitutionPolicy::All => (
            content.replace(config.marker.as_str(), &config.replacement),
            occurrences,
        ),
        SubstitutionPolicy::First => (
            content.replacen(config.marker.as_str(), &config.replacement, 1),
            1,
        ),
    };
    PatchPlan::Replace {
        content,
        replacements,
    }
}

/// Read the target, substitute the marker if present, and write it back.
/// The file is left untouched when the marker is missing.
pub async fn apply_patch(config: &PatchConfig) -> Result<PatchOutcome, PatchError> {
    config.validate()?;

    let path = &config.target;
    let bytes = fs::read(path).await.map_err(|source| PatchError::Read {
        path: path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| PatchError::Encoding {
        path: path.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    match plan_patch(&content, config) {
        PatchPlan::Replace {
            content,
            replacements,
        } => {
            fs::write(path, content.as_bytes())
                .await
                .map_err(|source| PatchError::Write {
                    path: path.clone(),
                    source,
                })?;
            info!(
                "Replaced {} occurrence(s) of '{}' in {}",
                replacements,
                config.marker,
                path.display()
            );
            Ok(PatchOutcome::Patched { replacements })
        }
        PatchPlan::Skip { diagnostic_lines } => {
            info!("Marker '{}' not found in {}", config.marker, path.display());
            Ok(PatchOutcome::Skipped { diagnostic_lines })
        }
    }
}
