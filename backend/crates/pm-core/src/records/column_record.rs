use serde::{Deserialize, Serialize};

/// Board column of a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub order: i64,
    pub icon: Option<String>,
    pub color: Option<String>,
}
