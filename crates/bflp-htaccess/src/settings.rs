//! Plugin settings: login thresholds, the `.htaccess` location and the 403 message.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_allowed_attempts() -> u32 {
    20
}

fn default_reset_time() -> u32 {
    60
}

fn default_htaccess_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Settings passed explicitly to the manager and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Failed logins allowed before an address is denied.
    #[serde(default = "default_allowed_attempts")]
    pub allowed_attempts: u32,

    /// Minutes before the failed-login count resets.
    #[serde(default = "default_reset_time")]
    pub reset_time: u32,

    /// Directory holding the `.htaccess` file.
    #[serde(default = "default_htaccess_dir")]
    pub htaccess_dir: PathBuf,

    /// Message served with 403 responses; empty for Apache's default.
    #[serde(default)]
    pub message_403: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_attempts: default_allowed_attempts(),
            reset_time: default_reset_time(),
            htaccess_dir: default_htaccess_dir(),
            message_403: String::new(),
        }
    }
}

impl Settings {
    /// Both thresholds must be at least 1.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("allowed_attempts", self.allowed_attempts),
            ("reset_time", self.reset_time),
        ] {
            if value < 1 {
                return Err(Error::InvalidSetting { field, min: 1, value });
            }
        }
        Ok(())
    }
}
