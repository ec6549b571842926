use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub color: String,
}
