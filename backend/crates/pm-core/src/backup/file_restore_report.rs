use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRestoreReport {
    pub attachments_restored: usize,
    pub attachments_missing: usize,
    pub avatars_restored: usize,
    pub avatars_missing: usize,
    /// URL paths that could not be restored, in processing order.
    pub missing_files: Vec<String>,
}

impl FileRestoreReport {
    pub fn is_complete(&self) -> bool {
        self.missing_files.is_empty()
    }
}
