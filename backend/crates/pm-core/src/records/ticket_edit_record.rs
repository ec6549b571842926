use serde::{Deserialize, Serialize};

/// One field change in a ticket's edit history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketEditRecord {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: String,
}
