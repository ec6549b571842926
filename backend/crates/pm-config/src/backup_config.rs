use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Import constraints
pub const DEFAULT_MAX_MANIFEST_BYTES: u64 = 500 * 1024 * 1024;
pub const MIN_TRANSACTION_TIMEOUT_SECS: u64 = 1;
pub const MAX_TRANSACTION_TIMEOUT_SECS: u64 = 3600;
pub const DEFAULT_TRANSACTION_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_FILES_DIR: &str = "public";

/// Backup import configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Largest manifest accepted, in bytes
    pub max_manifest_bytes: u64,
    /// Upper bound on the import transaction
    pub transaction_timeout_secs: u64,
    /// Where restored attachment and avatar files are written, relative to the config dir
    pub files_dir: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            max_manifest_bytes: DEFAULT_MAX_MANIFEST_BYTES,
            transaction_timeout_secs: DEFAULT_TRANSACTION_TIMEOUT_SECS,
            files_dir: String::from(DEFAULT_FILES_DIR),
        }
    }
}

impl BackupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_manifest_bytes == 0 {
            return Err(ConfigError::backup(
                "backup.max_manifest_bytes must be greater than 0",
            ));
        }

        if self.transaction_timeout_secs < MIN_TRANSACTION_TIMEOUT_SECS
            || self.transaction_timeout_secs > MAX_TRANSACTION_TIMEOUT_SECS
        {
            return Err(ConfigError::backup(format!(
                "backup.transaction_timeout_secs must be {}-{}, got {}",
                MIN_TRANSACTION_TIMEOUT_SECS,
                MAX_TRANSACTION_TIMEOUT_SECS,
                self.transaction_timeout_secs
            )));
        }

        let files_dir = std::path::Path::new(&self.files_dir);
        if self.files_dir.is_empty() || files_dir.is_absolute() || self.files_dir.contains("..")
        {
            return Err(ConfigError::backup(
                "backup.files_dir must be a non-empty relative path without '..'",
            ));
        }

        Ok(())
    }
}
