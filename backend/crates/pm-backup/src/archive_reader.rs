use crate::{
    BackupError, ContainerKind, MANIFEST_ENTRY_NAME, MAX_MANIFEST_BYTES, ParsedArchive, Result,
    classify, crypto, schema,
};

use pm_config::Config;

use std::io::{Cursor, Read};
use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// Turns raw archive bytes into a validated dataset.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveReader {
    max_manifest_bytes: usize,
}

impl Default for ArchiveReader {
    fn default() -> Self {
        Self::new(MAX_MANIFEST_BYTES)
    }
}

impl ArchiveReader {
    pub fn new(max_manifest_bytes: usize) -> Self {
        Self { max_manifest_bytes }
    }

    /// Reader with the configured manifest ceiling.
    pub fn from_config(config: &Config) -> Self {
        Self::new(usize::try_from(config.backup.max_manifest_bytes).unwrap_or(usize::MAX))
    }

    pub fn max_manifest_bytes(&self) -> usize {
        self.max_manifest_bytes
    }

    /// Classify, unpack, decrypt and validate an archive.
    ///
    /// Nothing here touches the store; every error leaves it as it was.
    pub fn parse(&self, bytes: Vec<u8>, password: Option<&str>) -> Result<ParsedArchive> {
        let password = password.filter(|p| !p.is_empty());

        match classify(&bytes) {
            ContainerKind::BundledArchive => {
                debug!("Reading bundled archive ({} bytes)", bytes.len());
                let manifest = self.extract_manifest(&bytes)?;
                let mut parsed = self.parse_manifest(&manifest, password)?;
                parsed.is_bundled = true;
                parsed.raw_bytes = Some(bytes);
                Ok(parsed)
            }
            ContainerKind::BareManifest => {
                debug!("Reading bare manifest ({} bytes)", bytes.len());
                self.parse_manifest(&bytes, password)
            }
        }
    }

    fn extract_manifest(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| BackupError::invalid_format(format!("unreadable ZIP archive: {}", e)))?;

        let entry = match archive.by_name(MANIFEST_ENTRY_NAME) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(BackupError::ArchiveEntryMissing {
                    entry: MANIFEST_ENTRY_NAME,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => {
                return Err(BackupError::invalid_format(format!(
                    "unreadable '{}' entry: {}",
                    MANIFEST_ENTRY_NAME, e
                )));
            }
        };

        self.ensure_within_limit(entry.size())?;

        // Declared sizes can lie; never read more than one byte past the limit.
        let mut manifest = Vec::new();
        entry
            .take(self.max_manifest_bytes as u64 + 1)
            .read_to_end(&mut manifest)
            .map_err(|e| {
                BackupError::invalid_format(format!(
                    "failed to read '{}': {}",
                    MANIFEST_ENTRY_NAME, e
                ))
            })?;

        Ok(manifest)
    }

    fn parse_manifest(&self, bytes: &[u8], password: Option<&str>) -> Result<ParsedArchive> {
        self.ensure_within_limit(bytes.len() as u64)?;

        let text = std::str::from_utf8(bytes)
            .map_err(|e| BackupError::invalid_format(format!("manifest is not UTF-8: {}", e)))?;

        let envelope = schema::parse_envelope(text)?;
        let exported_at = schema::parse_exported_at(&envelope)?;

        let dataset = if envelope.encrypted {
            let Some(password) = password else {
                return Err(BackupError::PasswordRequired {
                    location: ErrorLocation::from(Location::caller()),
                });
            };
            let payload = envelope.encrypted_payload().ok_or_else(|| {
                BackupError::invalid_structure("encrypted manifest is missing parameters")
            })?;

            let plaintext = crypto::decrypt(&payload, password)?;
            let text = String::from_utf8(plaintext).map_err(|e| {
                BackupError::invalid_format(format!("decrypted dataset is not UTF-8: {}", e))
            })?;
            schema::parse_dataset_text(&text)?
        } else {
            let data = envelope
                .data
                .ok_or_else(|| BackupError::invalid_structure("manifest has no 'data'"))?;
            schema::validate_dataset(data)?
        };

        debug!(
            "Manifest v{} validated ({} records, encrypted: {})",
            envelope.version,
            dataset.counts().total(),
            envelope.encrypted
        );

        Ok(ParsedArchive {
            version: envelope.version,
            dataset,
            export_options: envelope.options,
            exported_at,
            encrypted: envelope.encrypted,
            is_bundled: false,
            raw_bytes: None,
        })
    }

    #[track_caller]
    fn ensure_within_limit(&self, size: u64) -> Result<()> {
        if size > self.max_manifest_bytes as u64 {
            return Err(BackupError::OversizedInput {
                size,
                max: self.max_manifest_bytes,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
