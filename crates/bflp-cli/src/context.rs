//! Settings and manager resolved from the command line.

use std::path::Path;

use bflp_fs::{ConfigStore, NormalizedPath};
use bflp_htaccess::{Htaccess, Settings};

use crate::error::Result;

/// Everything a command needs: where settings live, their values, and the
/// manager pointed at the configured `.htaccess`.
#[derive(Debug)]
pub struct Context {
    pub settings_path: NormalizedPath,
    pub settings: Settings,
    pub htaccess: Htaccess,
}

impl Context {
    /// Load settings (defaults when the file is absent) and point the
    /// manager at `dir_override` when given.
    ///
    /// The override only retargets the manager; `settings` stay as stored.
    /// Out-of-range thresholds are reported but not rejected here, so
    /// `config set` can still repair them.
    pub fn load(config: &Path, dir_override: Option<&Path>) -> Result<Self> {
        let settings_path = NormalizedPath::new(config);
        let settings: Settings = ConfigStore::new().load_or_default(&settings_path)?;
        if let Err(e) = settings.validate() {
            tracing::warn!(settings = %settings_path, "{e}");
        }

        let htaccess = Htaccess::new(dir_override.unwrap_or(settings.htaccess_dir.as_path()));
        tracing::debug!(settings = %settings_path, htaccess = %htaccess.path(), "context loaded");

        Ok(Self {
            settings_path,
            settings,
            htaccess,
        })
    }

    /// Validate and persist the current settings.
    pub fn save_settings(&self) -> Result<()> {
        self.settings.validate()?;
        ConfigStore::new().save(&self.settings_path, &self.settings)?;
        Ok(())
    }
}
