use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketActivityRecord {
    pub id: String,
    pub ticket_id: String,
    /// Absent for system-generated entries.
    pub user_id: Option<String>,
    pub action: String,
    pub field: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    /// Groups entries produced by the same edit.
    pub group_id: Option<String>,
    pub created_at: String,
}
