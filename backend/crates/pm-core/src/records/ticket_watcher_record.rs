use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketWatcherRecord {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub created_at: String,
}
