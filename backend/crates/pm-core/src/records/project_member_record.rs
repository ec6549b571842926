use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberRecord {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub role_id: String,
    /// Per-member permission overrides layered on top of the role.
    pub override_permissions: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}
