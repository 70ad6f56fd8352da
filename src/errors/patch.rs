use std::path::PathBuf;

use thiserror::Error;

use super::{AppError, ErrorCategory};

/// Errors related to patching the target source file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Replacement '{replacement}' contains the marker '{marker}', so every run would patch again")]
    ReplacementContainsMarker { marker: String, replacement: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError for PatchError {
    fn error_code(&self) -> &'static str {
        match self {
            PatchError::Read { .. } => "PATCH_READ_FAILED",
            PatchError::Encoding { .. } => "PATCH_INVALID_ENCODING",
            PatchError::Write { .. } => "PATCH_WRITE_FAILED",
            PatchError::ReplacementContainsMarker { .. } => "PATCH_INVALID_CONFIG",
        }
    }

    fn error_category(&self) -> ErrorCategory {
        match self {
            PatchError::Read { .. } | PatchError::Write { .. } => ErrorCategory::FileSystem,
            PatchError::Encoding { .. } => ErrorCategory::Encoding,
            PatchError::ReplacementContainsMarker { .. } => ErrorCategory::Configuration,
        }
    }

    fn suggested_action(&self) -> Option<String> {
        match self {
            PatchError::Read { path, .. } => Some(format!(
                "Set PATCH_TARGET or pass --file if {} is not the right file",
                path.display()
            )),
            PatchError::ReplacementContainsMarker { .. } => Some(
                "Pick a PATCH_REPLACEMENT that no longer contains PATCH_MARKER".to_string(),
            ),
            _ => None,
        }
    }
}
