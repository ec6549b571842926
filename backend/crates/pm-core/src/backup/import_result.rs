use crate::backup::entity_counts::EntityCounts;
use crate::backup::file_restore_report::FileRestoreReport;

use serde::Serialize;

/// Outcome of a committed import. Database rows are always complete; files
/// may not be, see `files.missing_files`.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub counts: EntityCounts,
    pub files: FileRestoreReport,
}

impl ImportResult {
    pub fn has_warnings(&self) -> bool {
        !self.files.is_complete()
    }
}
