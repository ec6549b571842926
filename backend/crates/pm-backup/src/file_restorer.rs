//! Writes bundled attachment and avatar files to disk.
//!
//! Runs after the import transaction has committed. A file that is absent
//! from the archive or cannot be written is recorded in the report and
//! skipped; nothing here returns an error.

use crate::FILES_PREFIX;

use pm_core::{Dataset, ExportOptions, FileRestoreReport};

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::panic::Location;
use std::path::{Component, Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, warn};
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

/// Why a single file was not restored. Logged, then reported as missing.
#[derive(Error, Debug)]
pub(crate) enum FileRestoreError {
    #[error("URL '{url}' escapes the files root {location}")]
    UnsafePath { url: String, location: ErrorLocation },

    #[error("No archive entry for '{url}' {location}")]
    NotInArchive { url: String, location: ErrorLocation },

    #[error("Failed to read archive entry '{entry}': {source} {location}")]
    Zip {
        entry: String,
        #[source]
        source: ZipError,
        location: ErrorLocation,
    },

    #[error("Failed to write {}: {source} {location}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl FileRestoreError {
    #[track_caller]
    fn zip(entry: &str, source: ZipError) -> Self {
        Self::Zip {
            entry: entry.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Attachment,
    Avatar,
}

/// One file the restored records point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreTarget {
    pub kind: FileKind,
    /// URL path as stored on the record, e.g. `/uploads/a.png`.
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct FileRestorer {
    files_root: PathBuf,
}

impl FileRestorer {
    pub fn new(files_root: impl Into<PathBuf>) -> Self {
        Self {
            files_root: files_root.into(),
        }
    }

    pub fn files_root(&self) -> &Path {
        &self.files_root
    }

    /// Files the dataset references in the categories the exporter included.
    /// Avatars that are not local paths are not files and are skipped.
    pub fn targets(dataset: &Dataset, options: ExportOptions) -> Vec<RestoreTarget> {
        let mut targets = Vec::new();

        if options.include_attachments {
            targets.extend(dataset.attachments.iter().map(|a| RestoreTarget {
                kind: FileKind::Attachment,
                url: a.url.clone(),
            }));
        }

        if options.include_avatars {
            targets.extend(dataset.users.iter().filter_map(|u| {
                u.local_avatar().map(|url| RestoreTarget {
                    kind: FileKind::Avatar,
                    url: url.to_string(),
                })
            }));
        }

        targets
    }

    /// Restore every target from the archive. Never fails; see the report.
    pub fn restore(&self, archive_bytes: &[u8], targets: &[RestoreTarget]) -> FileRestoreReport {
        let mut report = FileRestoreReport::default();
        if targets.is_empty() {
            return report;
        }

        let mut archive = match ZipArchive::new(Cursor::new(archive_bytes)) {
            Ok(archive) => archive,
            Err(e) => {
                warn!("Cannot open archive for file restore: {}", e);
                for target in targets {
                    Self::record_missing(&mut report, target);
                }
                return report;
            }
        };

        let entries = Self::index_entries(&archive);

        for target in targets {
            match self.restore_one(&mut archive, &entries, target) {
                Ok(_) => match target.kind {
                    FileKind::Attachment => report.attachments_restored += 1,
                    FileKind::Avatar => report.avatars_restored += 1,
                },
                Err(e) => {
                    warn!("File not restored: {}", e);
                    Self::record_missing(&mut report, target);
                }
            }
        }

        debug!(
            "Files restored: {} attachments, {} avatars, {} missing",
            report.attachments_restored,
            report.avatars_restored,
            report.missing_files.len()
        );

        report
    }

    /// Report every target as missing. Used when restoration could not run.
    pub fn all_missing(targets: &[RestoreTarget]) -> FileRestoreReport {
        let mut report = FileRestoreReport::default();
        for target in targets {
            Self::record_missing(&mut report, target);
        }
        report
    }

    /// Map `files/<rel>` entries to their `/<rel>` URL.
    pub(crate) fn index_entries<R: Read + std::io::Seek>(archive: &ZipArchive<R>) -> HashMap<String, String> {
        archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .filter_map(|name| {
                name.strip_prefix(FILES_PREFIX)
                    .map(|rel| (format!("/{}", rel), name.to_string()))
            })
            .collect()
    }

    pub(crate) fn restore_one<R: Read + std::io::Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        entries: &HashMap<String, String>,
        target: &RestoreTarget,
    ) -> std::result::Result<PathBuf, FileRestoreError> {
        let relative =
            safe_relative_path(&target.url).ok_or_else(|| FileRestoreError::UnsafePath {
                url: target.url.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let entry_name = entries
            .get(&target.url)
            .ok_or_else(|| FileRestoreError::NotInArchive {
                url: target.url.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut entry = archive
            .by_name(entry_name)
            .map_err(|e| FileRestoreError::zip(entry_name, e))?;
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| FileRestoreError::zip(entry_name, ZipError::Io(e)))?;

        let destination = self.files_root.join(relative);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FileRestoreError::io(parent, e))?;
        }
        std::fs::write(&destination, bytes).map_err(|e| FileRestoreError::io(&destination, e))?;

        Ok(destination)
    }

    fn record_missing(report: &mut FileRestoreReport, target: &RestoreTarget) {
        match target.kind {
            FileKind::Attachment => report.attachments_missing += 1,
            FileKind::Avatar => report.avatars_missing += 1,
        }
        report.missing_files.push(target.url.clone());
    }
}

/// Relative path for a URL, or `None` if any component could leave the root.
pub fn safe_relative_path(url: &str) -> Option<PathBuf> {
    let trimmed = url.strip_prefix('/')?;
    let path = Path::new(trimmed);

    let mut relative = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            _ => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
