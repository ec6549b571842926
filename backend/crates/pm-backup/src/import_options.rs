use pm_core::ExportOptions;

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// ZIP bytes to restore files from. `None` when the manifest arrived bare.
    pub archive_bytes: Option<Vec<u8>>,
    pub export_options: ExportOptions,
}
