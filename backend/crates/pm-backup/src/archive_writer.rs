use crate::{BackupError, EXPORT_VERSION, FILES_PREFIX, MANIFEST_ENTRY_NAME, Result, crypto};

use pm_core::{ArchiveEnvelope, Dataset, ExportOptions};

use std::io::{Cursor, Write};

use chrono::{SecondsFormat, Utc};
use log::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Produces archives in the current format.
pub struct ArchiveWriter;

impl ArchiveWriter {
    /// Wrap a dataset in an envelope, encrypting it when a password is given.
    pub fn envelope(
        dataset: &Dataset,
        options: ExportOptions,
        password: Option<&str>,
    ) -> Result<ArchiveEnvelope> {
        let exported_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        match password.filter(|p| !p.is_empty()) {
            Some(password) => {
                let plaintext = serde_json::to_vec(dataset).map_err(BackupError::serialization)?;
                let payload = crypto::encrypt(&plaintext, password)?;

                Ok(ArchiveEnvelope {
                    version: EXPORT_VERSION.to_string(),
                    encrypted: true,
                    exported_at,
                    options,
                    ciphertext: Some(payload.ciphertext),
                    salt: Some(payload.salt),
                    nonce: Some(payload.nonce),
                    auth_tag: Some(payload.auth_tag),
                    data: None,
                })
            }
            None => Ok(ArchiveEnvelope {
                version: EXPORT_VERSION.to_string(),
                encrypted: false,
                exported_at,
                options,
                ciphertext: None,
                salt: None,
                nonce: None,
                auth_tag: None,
                data: Some(serde_json::to_value(dataset).map_err(BackupError::serialization)?),
            }),
        }
    }

    /// Bare manifest bytes.
    pub fn manifest(
        dataset: &Dataset,
        options: ExportOptions,
        password: Option<&str>,
    ) -> Result<Vec<u8>> {
        let envelope = Self::envelope(dataset, options, password)?;
        serde_json::to_vec_pretty(&envelope).map_err(BackupError::serialization)
    }

    /// ZIP holding the manifest and each `(url, bytes)` file under `files/`.
    pub fn bundle(manifest: &[u8], files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(MANIFEST_ENTRY_NAME, options)
            .map_err(BackupError::archive_write)?;
        zip.write_all(manifest)
            .map_err(|e| BackupError::io("Failed to write manifest entry", e))?;

        for (url, bytes) in files {
            let name = format!("{}{}", FILES_PREFIX, url.trim_start_matches('/'));
            zip.start_file(name.as_str(), options)
                .map_err(BackupError::archive_write)?;
            zip.write_all(bytes)
                .map_err(|e| BackupError::io(format!("Failed to write {}", name), e))?;
        }

        let cursor = zip.finish().map_err(BackupError::archive_write)?;
        let bytes = cursor.into_inner();

        debug!("Bundled {} files into {} bytes", files.len(), bytes.len());
        Ok(bytes)
    }
}
