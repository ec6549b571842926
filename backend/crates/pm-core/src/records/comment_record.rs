use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: String,
    pub ticket_id: String,
    pub author_id: String,
    pub content: String,
    #[serde(default)]
    pub is_system_generated: bool,
    pub source: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
