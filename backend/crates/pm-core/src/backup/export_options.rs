use serde::{Deserialize, Serialize};

/// Optional categories the exporter included. Decides whether a missing
/// file reference is expected or worth reporting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub include_attachments: bool,
    pub include_avatars: bool,
}
