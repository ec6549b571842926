use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    pub id: String,
    pub email: String,
    pub token: String,
    pub role: String,
    pub status: String,
    pub expires_at: String,
    pub invited_by_id: String,
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
