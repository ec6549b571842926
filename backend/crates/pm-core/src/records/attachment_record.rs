use serde::{Deserialize, Serialize};

/// Attachment metadata. The bytes live on disk under `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    pub id: String,
    pub ticket_id: String,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploader_id: String,
    pub created_at: String,
}
