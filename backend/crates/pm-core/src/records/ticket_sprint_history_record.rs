use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketSprintHistoryRecord {
    pub id: String,
    pub ticket_id: String,
    pub sprint_id: String,
    pub added_at: String,
    pub removed_at: Option<String>,
    /// How the ticket entered the sprint (`added`, `carried_over`).
    pub entry_type: String,
    /// How it left (`completed`, `carried_over`, `removed`), if it has.
    pub exit_status: Option<String>,
}
