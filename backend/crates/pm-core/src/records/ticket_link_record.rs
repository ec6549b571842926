use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketLinkRecord {
    pub id: String,
    pub from_ticket_id: String,
    pub to_ticket_id: String,
    pub link_type: String,
    pub created_at: String,
}
