use crate::backup::encrypted_payload::EncryptedPayload;
use crate::backup::export_options::ExportOptions;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outer document of a backup manifest.
///
/// The dataset is kept as raw JSON here; it is validated separately once
/// the version is known to be supported and, for encrypted archives, once
/// it has been decrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEnvelope {
    pub version: String,
    pub encrypted: bool,
    pub exported_at: String,
    #[serde(default)]
    pub options: ExportOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphertext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ArchiveEnvelope {
    /// Encryption parameters, if all four are present.
    pub fn encrypted_payload(&self) -> Option<EncryptedPayload> {
        Some(EncryptedPayload {
            ciphertext: self.ciphertext.clone()?,
            salt: self.salt.clone()?,
            nonce: self.nonce.clone()?,
            auth_tag: self.auth_tag.clone()?,
        })
    }
}
