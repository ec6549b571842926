pub mod archive_envelope;
pub mod dataset;
pub mod encrypted_payload;
pub mod entity_counts;
pub mod export_options;
pub mod file_restore_report;
pub mod import_result;
pub mod timestamps;
