use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSprintSettingsRecord {
    pub id: String,
    pub project_id: String,
    pub default_sprint_duration: i64,
    pub auto_carry_over_incomplete: bool,
    pub done_column_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
