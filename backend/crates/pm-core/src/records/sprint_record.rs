use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub goal: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    /// `planning`, `active` or `completed`; not interpreted here.
    pub status: String,
    pub completed_at: Option<String>,
    pub completed_by_id: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}
