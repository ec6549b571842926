use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pm-restore")]
#[command(about = "Restore or inspect a Blazor Agile Board backup archive")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Replace the configured store with the archive's contents
    Import {
        /// Backup file: a JSON manifest or a ZIP bundle
        archive: PathBuf,

        /// Password for encrypted archives
        #[arg(long, env = "PM_BACKUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Validate an archive and print what it contains, without importing
    Inspect {
        archive: PathBuf,

        #[arg(long, env = "PM_BACKUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}
