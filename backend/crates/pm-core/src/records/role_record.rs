use serde::{Deserialize, Serialize};

/// Project-scoped role. Permissions are opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub is_default: bool,
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}
