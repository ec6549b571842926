//! Structural validation of manifests.
//!
//! This is the only place untrusted JSON becomes typed records. Checks are
//! shape-only: foreign keys are left to the database.

use crate::{BackupError, Result, SUPPORTED_VERSIONS};

use pm_core::{ArchiveEnvelope, Dataset, parse_datetime};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde_json::Value;

/// Parse manifest text into an envelope.
///
/// The version is checked before the rest of the envelope so a manifest
/// from a newer exporter reports its version rather than a shape error.
pub fn parse_envelope(text: &str) -> Result<ArchiveEnvelope> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| BackupError::invalid_format(format!("manifest is not valid JSON: {}", e)))?;

    let version = value
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| BackupError::invalid_structure("manifest has no string 'version'"))?;
    ensure_supported_version(version)?;

    let envelope: ArchiveEnvelope = serde_json::from_value(value)
        .map_err(|e| BackupError::invalid_structure(format!("manifest envelope: {}", e)))?;

    validate_envelope(&envelope)?;

    Ok(envelope)
}

#[track_caller]
pub fn ensure_supported_version(version: &str) -> Result<()> {
    if SUPPORTED_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(BackupError::UnsupportedVersion {
            version: version.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Checks that depend on more than one field.
pub fn validate_envelope(envelope: &ArchiveEnvelope) -> Result<()> {
    if envelope.encrypted {
        if envelope.encrypted_payload().is_none() {
            return Err(BackupError::invalid_structure(
                "encrypted manifest must carry ciphertext, salt, nonce and authTag",
            ));
        }
    } else if envelope.data.is_none() {
        return Err(BackupError::invalid_structure(
            "unencrypted manifest must carry 'data'",
        ));
    }

    Ok(())
}

pub fn parse_exported_at(envelope: &ArchiveEnvelope) -> Result<DateTime<Utc>> {
    parse_datetime(&envelope.exported_at, "exportedAt")
        .map_err(|e| BackupError::invalid_structure(e.to_string()))
}

/// Type the dataset payload. Collections added after 1.0.0 default to empty.
pub fn validate_dataset(value: Value) -> Result<Dataset> {
    serde_json::from_value(value)
        .map_err(|e| BackupError::invalid_structure(format!("dataset: {}", e)))
}

/// Parse decrypted dataset text.
pub fn parse_dataset_text(text: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        BackupError::invalid_format(format!("decrypted dataset is not valid JSON: {}", e))
    })?;

    validate_dataset(value)
}
