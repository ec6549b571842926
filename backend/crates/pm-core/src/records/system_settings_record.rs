use serde::{Deserialize, Serialize};

/// Global settings singleton. Survives the wipe and is upserted on import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsRecord {
    pub app_name: String,
    pub logo_url: Option<String>,
    pub max_upload_size: i64,
    pub allowed_upload_types: Vec<String>,
    pub updated_at: String,
    /// Not a foreign key: the user may not exist after the wipe.
    pub updated_by: Option<String>,
}
