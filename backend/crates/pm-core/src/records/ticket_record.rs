use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub id: String,
    pub number: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub priority: String,
    pub order: i64,

    // Estimation
    pub story_points: Option<i64>,
    pub estimate: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,

    // Release tracking
    pub environment: Option<String>,
    pub affected_version: Option<String>,
    pub fix_version: Option<String>,
    pub resolution: Option<String>,
    pub resolved_at: Option<String>,

    // References
    pub project_id: String,
    pub column_id: String,
    pub assignee_id: Option<String>,
    pub creator_id: String,
    pub sprint_id: Option<String>,
    pub parent_id: Option<String>,

    // Sprint carry-over
    #[serde(default)]
    pub is_carried_over: bool,
    pub carried_from_sprint_id: Option<String>,
    #[serde(default)]
    pub carryover_count: i64,

    #[serde(default)]
    pub label_ids: Vec<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl TicketRecord {
    /// Parent reference, treating an empty string as no parent.
    pub fn parent_ref(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.is_empty())
    }
}
