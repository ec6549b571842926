use crate::backup::entity_counts::EntityCounts;
use crate::records::{
    attachment_record::AttachmentRecord, column_record::ColumnRecord,
    comment_record::CommentRecord, invitation_record::InvitationRecord,
    label_record::LabelRecord, project_member_record::ProjectMemberRecord,
    project_record::ProjectRecord, project_sprint_settings_record::ProjectSprintSettingsRecord,
    role_record::RoleRecord, sprint_record::SprintRecord,
    system_settings_record::SystemSettingsRecord, ticket_activity_record::TicketActivityRecord,
    ticket_edit_record::TicketEditRecord, ticket_link_record::TicketLinkRecord,
    ticket_record::TicketRecord, ticket_sprint_history_record::TicketSprintHistoryRecord,
    ticket_watcher_record::TicketWatcherRecord, user_record::UserRecord,
};

use serde::{Deserialize, Serialize};

/// Snapshot of every collection in the store.
///
/// Collections added in format 1.1.0 default to empty so 1.0.0 payloads
/// still validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub projects: Vec<ProjectRecord>,
    pub roles: Vec<RoleRecord>,
    pub columns: Vec<ColumnRecord>,
    pub labels: Vec<LabelRecord>,
    pub sprints: Vec<SprintRecord>,
    pub project_members: Vec<ProjectMemberRecord>,
    #[serde(default)]
    pub project_sprint_settings: Vec<ProjectSprintSettingsRecord>,
    pub tickets: Vec<TicketRecord>,
    pub ticket_links: Vec<TicketLinkRecord>,
    pub ticket_watchers: Vec<TicketWatcherRecord>,
    pub comments: Vec<CommentRecord>,
    pub ticket_edits: Vec<TicketEditRecord>,
    pub ticket_activities: Vec<TicketActivityRecord>,
    pub attachments: Vec<AttachmentRecord>,
    #[serde(default)]
    pub ticket_sprint_history: Vec<TicketSprintHistoryRecord>,
    #[serde(default)]
    pub invitations: Vec<InvitationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<SystemSettingsRecord>,
}

impl Dataset {
    /// Number of records per collection, as they appear in the payload.
    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            users: self.users.len(),
            projects: self.projects.len(),
            roles: self.roles.len(),
            columns: self.columns.len(),
            labels: self.labels.len(),
            sprints: self.sprints.len(),
            project_members: self.project_members.len(),
            project_sprint_settings: self.project_sprint_settings.len(),
            tickets: self.tickets.len(),
            ticket_labels: self.tickets.iter().map(|t| t.label_ids.len()).sum(),
            ticket_links: self.ticket_links.len(),
            ticket_watchers: self.ticket_watchers.len(),
            comments: self.comments.len(),
            ticket_edits: self.ticket_edits.len(),
            ticket_activities: self.ticket_activities.len(),
            attachments: self.attachments.len(),
            ticket_sprint_history: self.ticket_sprint_history.len(),
            invitations: self.invitations.len(),
            system_settings: usize::from(self.system_settings.is_some()),
        }
    }
}
