use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestoreCliError {
    #[error("Config error: {0}")]
    Config(#[from] pm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pm_db::DbError),

    #[error("{0}")]
    Backup(#[from] pm_backup::BackupError),

    #[error("Failed to read archive {path}: {source}")]
    ReadArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, RestoreCliError>;
