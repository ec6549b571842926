use serde::{Deserialize, Serialize};

/// AES-256-GCM output plus the parameters needed to reverse it.
/// Every field is standard base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedPayload {
    pub ciphertext: String,
    pub salt: String,
    pub nonce: String,
    pub auth_tag: String,
}
