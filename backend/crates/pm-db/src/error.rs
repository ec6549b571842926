use pm_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record conversion failed: {source} {location}")]
    Conversion {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Failed to encode {field}: {source} {location}")]
    Encode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Conversion {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// Serialize a list column to its JSON text form.
    #[track_caller]
    pub fn encode_json<T: serde::Serialize + ?Sized>(
        value: &T,
        field: &'static str,
    ) -> Result<String> {
        serde_json::to_string(value).map_err(|source| Self::Encode {
            field,
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
