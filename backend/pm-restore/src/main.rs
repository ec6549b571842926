//! pm-restore - offline backup restore
//!
//! ```bash
//! # Check an archive without touching the store
//! pm-restore inspect backup.zip --pretty
//!
//! # Replace the store; the password may also come from PM_BACKUP_PASSWORD
//! pm-restore import backup.zip --password "..."
//! ```

mod cli;
mod error;
mod logger;

#[cfg(test)]
mod tests;

use crate::{
    cli::{Cli, Commands},
    error::{RestoreCliError, Result as RestoreCliResult},
};

use pm_backup::{ArchiveReader, RestoreService};
use pm_config::Config;
use pm_db::Database;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command).await;

    match result.and_then(|value| render(&value, cli.pretty)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> RestoreCliResult<serde_json::Value> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = match &config.logging.file {
        Some(filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir).map_err(|e| RestoreCliError::Logger {
                message: format!("Failed to create log dir {}: {}", log_dir.display(), e),
            })?;
            Some(log_dir.join(filename))
        }
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting pm-restore v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    execute(command, &config).await
}

/// Run one command against a loaded configuration. Only `import` opens the store.
async fn execute(command: Commands, config: &Config) -> RestoreCliResult<serde_json::Value> {
    match command {
        Commands::Import { archive, password } => {
            let bytes = read_archive(&archive)?;
            let pool = Database::open(&config.database_path()?).await?;
            let service = RestoreService::from_config(pool, config)?;
            let result = service.restore(bytes, password.as_deref()).await?;
            to_value(&result)
        }
        Commands::Inspect { archive, password } => {
            let bytes = read_archive(&archive)?;
            let parsed = ArchiveReader::from_config(config).parse(bytes, password.as_deref())?;
            to_value(&parsed.summary())
        }
    }
}

fn read_archive(path: &Path) -> RestoreCliResult<Vec<u8>> {
    info!("Reading archive: {}", path.display());
    std::fs::read(path).map_err(|source| RestoreCliError::ReadArchive {
        path: path.to_path_buf(),
        source,
    })
}

fn to_value<T: Serialize>(value: &T) -> RestoreCliResult<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

fn render(value: &serde_json::Value, pretty: bool) -> RestoreCliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
