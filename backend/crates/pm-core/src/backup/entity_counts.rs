use serde::Serialize;

/// Row count per entity category. Empty categories are reported as zero.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub users: usize,
    pub projects: usize,
    pub roles: usize,
    pub columns: usize,
    pub labels: usize,
    pub sprints: usize,
    pub project_members: usize,
    pub project_sprint_settings: usize,
    pub tickets: usize,
    pub ticket_labels: usize,
    pub ticket_links: usize,
    pub ticket_watchers: usize,
    pub comments: usize,
    pub ticket_edits: usize,
    pub ticket_activities: usize,
    pub attachments: usize,
    pub ticket_sprint_history: usize,
    pub invitations: usize,
    pub system_settings: usize,
}

impl EntityCounts {
    pub fn total(&self) -> usize {
        self.users
            + self.projects
            + self.roles
            + self.columns
            + self.labels
            + self.sprints
            + self.project_members
            + self.project_sprint_settings
            + self.tickets
            + self.ticket_labels
            + self.ticket_links
            + self.ticket_watchers
            + self.comments
            + self.ticket_edits
            + self.ticket_activities
            + self.attachments
            + self.ticket_sprint_history
            + self.invitations
            + self.system_settings
    }
}
