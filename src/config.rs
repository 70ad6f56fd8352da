use std::env;
use std::path::PathBuf;

use crate::errors::PatchError;
use crate::patch::SubstitutionPolicy;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "phimkhoi";

pub const DEFAULT_PATCH_TARGET: &str = "/home/ubuntu/phimkhoi/src/components/WatchContainer.tsx";
pub const DEFAULT_PATCH_MARKER: &str = "{ List as ListIcon }";
pub const DEFAULT_PATCH_REPLACEMENT: &str = "{ List as ListIcon, Monitor }";
pub const DEFAULT_PATCH_DIAGNOSTIC: &str = "lucide-react";

/// Connection target and collection names for the `check_db` report.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub watch_history_collection: String,
    pub favorites_collection: String,
    pub users_collection: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            watch_history_collection: "watchhistories".to_string(),
            favorites_collection: "favorites".to_string(),
            users_collection: "users".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            mongodb_uri: env::var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
            ..defaults
        }
    }
}

/// What `patch_monitor` edits and how.
#[derive(Clone, Debug)]
pub struct PatchConfig {
    pub target: PathBuf,
    pub marker: String,
    pub replacement: String,
    /// Lines containing this are echoed when the marker is missing.
    pub diagnostic: String,
    pub policy: SubstitutionPolicy,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_PATCH_TARGET),
            marker: DEFAULT_PATCH_MARKER.to_string(),
            replacement: DEFAULT_PATCH_REPLACEMENT.to_string(),
            diagnostic: DEFAULT_PATCH_DIAGNOSTIC.to_string(),
            policy: SubstitutionPolicy::default(),
        }
    }
}

impl PatchConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            target: env::var("PATCH_TARGET")
                .map(PathBuf::from)
                .unwrap_or(defaults.target),
            marker: env::var("PATCH_MARKER").unwrap_or(defaults.marker),
            replacement: env::var("PATCH_REPLACEMENT").unwrap_or(defaults.replacement),
            diagnostic: env::var("PATCH_DIAGNOSTIC").unwrap_or(defaults.diagnostic),
            policy: env::var("PATCH_POLICY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.policy),
        }
    }

    /// A replacement that still contains the marker would be re-applied on
    /// every run.
    pub fn validate(&self) -> Result<(), PatchError> {
        if !self.marker.is_empty() && self.replacement.contains(self.marker.as_str()) {
            return Err(PatchError::ReplacementContainsMarker {
                marker: self.marker.clone(),
                replacement: self.replacement.clone(),
            });
        }
        Ok(())
    }
}
