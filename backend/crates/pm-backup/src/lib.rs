//! Backup archive reading, validation and restoration.
//!
//! An archive is either a bare JSON manifest or a ZIP bundle holding the
//! manifest as `backup.json` next to attachment and avatar files under
//! `files/`. The manifest may be encrypted with a password. Restoring
//! replaces the whole store inside one transaction, then writes bundled
//! files to disk.

pub mod archive_reader;
pub mod archive_writer;
pub mod container_kind;
pub mod crypto;
pub mod error;
pub mod file_restorer;
pub mod import_options;
pub mod importer;
pub mod parsed_archive;
pub mod restore_service;
pub mod schema;

#[cfg(test)]
mod tests;

pub use archive_reader::ArchiveReader;
pub use archive_writer::ArchiveWriter;
pub use container_kind::{ContainerKind, classify};
pub use error::{BackupError, Result};
pub use file_restorer::{FileRestorer, RestoreTarget};
pub use import_options::ImportOptions;
pub use importer::Importer;
pub use parsed_archive::ParsedArchive;
pub use restore_service::RestoreService;

/// Format written by this crate.
pub const EXPORT_VERSION: &str = "1.1.0";
/// Oldest format still accepted.
pub const LEGACY_EXPORT_VERSION: &str = "1.0.0";
pub const SUPPORTED_VERSIONS: [&str; 2] = [LEGACY_EXPORT_VERSION, EXPORT_VERSION];

pub const MANIFEST_ENTRY_NAME: &str = "backup.json";
pub const FILES_PREFIX: &str = "files/";
/// Local file header signature that opens every ZIP archive.
pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
pub const MAX_MANIFEST_BYTES: usize = 500 * 1024 * 1024;
