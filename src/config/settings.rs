//! User settings for fintrack
//!
//! Display preferences plus the user id that stands in for the identity
//! provider when none is passed on the command line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::UserId;
use crate::storage::write_json_atomic;

/// Environment variable carrying the user id
pub const USER_ENV: &str = "FINTRACK_USER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for dates in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default user id when neither `--user` nor `FINTRACK_USER` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Kz".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            user_id: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller decides to
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Config(format!("Failed to parse settings file: {}", e)))?;

        debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the acting user: explicit flag, then environment, then settings
    pub fn resolve_user(
        &self,
        flag: Option<&str>,
        env: Option<&str>,
    ) -> Result<UserId, FintrackError> {
        flag.and_then(UserId::new)
            .or_else(|| env.and_then(UserId::new))
            .or_else(|| self.user_id.as_deref().and_then(UserId::new))
            .ok_or(FintrackError::MissingUser)
    }
}
