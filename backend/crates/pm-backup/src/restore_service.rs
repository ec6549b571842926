use crate::{ArchiveReader, ImportOptions, Importer, ParsedArchive, Result};

use pm_config::Config;
use pm_core::ImportResult;

use log::info;
use sqlx::SqlitePool;

/// Parse and import in one call.
#[derive(Debug, Clone)]
pub struct RestoreService {
    reader: ArchiveReader,
    importer: Importer,
}

impl RestoreService {
    pub fn new(reader: ArchiveReader, importer: Importer) -> Self {
        Self { reader, importer }
    }

    /// Build from configuration: manifest ceiling, transaction timeout and files root.
    pub fn from_config(pool: SqlitePool, config: &Config) -> Result<Self> {
        let reader = ArchiveReader::from_config(config);
        let importer = Importer::new(pool, config.transaction_timeout(), config.files_root()?);

        Ok(Self::new(reader, importer))
    }

    /// Validate an archive without touching the store.
    pub fn inspect(&self, bytes: Vec<u8>, password: Option<&str>) -> Result<ParsedArchive> {
        self.reader.parse(bytes, password)
    }

    /// Replace the store with the archive's contents.
    pub async fn restore(&self, bytes: Vec<u8>, password: Option<&str>) -> Result<ImportResult> {
        let parsed = self.reader.parse(bytes, password)?;

        info!(
            "Restoring v{} archive exported at {} (bundled: {}, encrypted: {})",
            parsed.version, parsed.exported_at, parsed.is_bundled, parsed.encrypted
        );

        let options = ImportOptions {
            archive_bytes: parsed.raw_bytes,
            export_options: parsed.export_options,
        };

        self.importer.import(parsed.dataset, options).await
    }
}
