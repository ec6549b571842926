use pm_config::ConfigError;
use pm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Archive is {size} bytes, larger than the {max} byte limit {location}")]
    OversizedInput {
        size: u64,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid archive format: {message} {location}")]
    InvalidFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid archive structure: {message} {location}")]
    InvalidStructure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported backup version '{version}' {location}")]
    UnsupportedVersion {
        version: String,
        location: ErrorLocation,
    },

    #[error("Archive is encrypted and no password was given {location}")]
    PasswordRequired { location: ErrorLocation },

    #[error("Decryption failed: invalid password or corrupted data {location}")]
    DecryptionFailed { location: ErrorLocation },

    #[error("Encryption failed {location}")]
    EncryptionFailed { location: ErrorLocation },

    #[error("Archive has no '{entry}' entry {location}")]
    ArchiveEntryMissing {
        entry: &'static str,
        location: ErrorLocation,
    },

    #[error("Import failed and was rolled back: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Import exceeded {timeout_secs}s and was rolled back {location}")]
    ImportTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Another import is already running {location}")]
    ImportInProgress { location: ErrorLocation },

    #[error("Failed to write archive: {source} {location}")]
    ArchiveWrite {
        #[source]
        source: zip::result::ZipError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize manifest: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("IO error: {message}: {source} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl BackupError {
    #[track_caller]
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_structure<S: Into<String>>(message: S) -> Self {
        Self::InvalidStructure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decryption_failed() -> Self {
        Self::DecryptionFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn archive_write(source: zip::result::ZipError) -> Self {
        Self::ArchiveWrite {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for BackupError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for BackupError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::from(DbError::from(source))
    }
}

impl From<ConfigError> for BackupError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;
