use pm_core::{Dataset, EntityCounts, ExportOptions};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fully validated archive, ready to import.
#[derive(Debug, Clone)]
pub struct ParsedArchive {
    pub version: String,
    pub dataset: Dataset,
    pub export_options: ExportOptions,
    pub exported_at: DateTime<Utc>,
    pub encrypted: bool,
    pub is_bundled: bool,
    /// The original ZIP bytes, kept for file restoration. `None` for bare manifests.
    pub raw_bytes: Option<Vec<u8>>,
}

/// What an archive holds, without touching the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSummary {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub encrypted: bool,
    pub is_bundled: bool,
    pub options: ExportOptions,
    pub counts: EntityCounts,
    pub total_records: usize,
}

impl ParsedArchive {
    pub fn summary(&self) -> ArchiveSummary {
        let counts = self.dataset.counts();

        ArchiveSummary {
            version: self.version.clone(),
            exported_at: self.exported_at,
            encrypted: self.encrypted,
            is_bundled: self.is_bundled,
            options: self.export_options,
            counts,
            total_records: counts.total(),
        }
    }
}
