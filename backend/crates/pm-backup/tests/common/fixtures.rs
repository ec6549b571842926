#![allow(dead_code)]

use pm_core::{AttachmentRecord, Dataset, SystemSettingsRecord, TicketRecord};

use serde_json::{Value, json};

pub const TIMESTAMP: &str = "2024-03-01T09:30:00.000Z";
pub const PROJECT_ID: &str = "p-1";
pub const COLUMN_ID: &str = "c-1";
pub const OWNER_ID: &str = "u-1";

/// Two users, one project with four columns and one label, nothing else.
pub fn example_dataset_json() -> Value {
    json!({
        "users": [
            {
                "id": "u-1",
                "username": "ada",
                "email": "ada@example.com",
                "name": "Ada",
                "passwordHash": "$2b$10$abcdefghijklmnopqrstuv",
                "avatar": "/uploads/avatars/u-1.png",
                "avatarColor": "#3366ff",
                "isSystemAdmin": true,
                "isActive": true,
                "createdAt": TIMESTAMP,
                "updatedAt": TIMESTAMP,
                "lastLoginAt": "2024-03-02T08:00:00Z",
                "passwordChangedAt": null
            },
            {
                "id": "u-2",
                "username": "grace",
                "email": null,
                "name": "Grace",
                "passwordHash": null,
                "avatar": "https://gravatar.example.com/grace.png",
                "avatarColor": null,
                "isSystemAdmin": false,
                "isActive": true,
                "createdAt": TIMESTAMP,
                "updatedAt": TIMESTAMP,
                "lastLoginAt": null,
                "passwordChangedAt": null
            }
        ],
        "projects": [{
            "id": PROJECT_ID,
            "name": "Apollo",
            "key": "APO",
            "description": "Moon",
            "color": "#ff9900",
            "createdAt": TIMESTAMP,
            "updatedAt": TIMESTAMP
        }],
        "roles": [],
        "columns": [
            { "id": "c-1", "projectId": PROJECT_ID, "name": "Backlog", "order": 0, "icon": null, "color": null },
            { "id": "c-2", "projectId": PROJECT_ID, "name": "To Do", "order": 1, "icon": null, "color": null },
            { "id": "c-3", "projectId": PROJECT_ID, "name": "In Progress", "order": 2, "icon": "play", "color": "#00f" },
            { "id": "c-4", "projectId": PROJECT_ID, "name": "Done", "order": 3, "icon": "check", "color": "#0f0" }
        ],
        "labels": [
            { "id": "l-1", "projectId": PROJECT_ID, "name": "bug", "color": "#f00" }
        ],
        "sprints": [],
        "projectMembers": [],
        "tickets": [],
        "ticketLinks": [],
        "ticketWatchers": [],
        "comments": [],
        "ticketEdits": [],
        "ticketActivities": [],
        "attachments": []
    })
}

pub fn example_dataset() -> Dataset {
    serde_json::from_value(example_dataset_json()).expect("fixture dataset is valid")
}

pub fn ticket(id: &str, number: i64) -> TicketRecord {
    TicketRecord {
        id: id.to_string(),
        number,
        title: format!("Ticket {}", number),
        description: None,
        ticket_type: "task".to_string(),
        priority: "medium".to_string(),
        order: number,
        story_points: Some(3),
        estimate: None,
        start_date: Some("2024-03-04".to_string()),
        due_date: None,
        environment: None,
        affected_version: None,
        fix_version: None,
        resolution: None,
        resolved_at: None,
        project_id: PROJECT_ID.to_string(),
        column_id: COLUMN_ID.to_string(),
        assignee_id: Some("u-2".to_string()),
        creator_id: OWNER_ID.to_string(),
        sprint_id: None,
        parent_id: None,
        is_carried_over: false,
        carried_from_sprint_id: None,
        carryover_count: 0,
        label_ids: Vec::new(),
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    }
}

pub fn child_ticket(id: &str, number: i64, parent_id: &str) -> TicketRecord {
    TicketRecord {
        parent_id: Some(parent_id.to_string()),
        ..ticket(id, number)
    }
}

pub fn attachment(id: &str, ticket_id: &str, url: &str) -> AttachmentRecord {
    AttachmentRecord {
        id: id.to_string(),
        ticket_id: ticket_id.to_string(),
        filename: format!("{}.txt", id),
        original_name: "notes.txt".to_string(),
        mime_type: "text/plain".to_string(),
        size: 5,
        url: url.to_string(),
        uploader_id: OWNER_ID.to_string(),
        created_at: TIMESTAMP.to_string(),
    }
}

pub fn settings(app_name: &str) -> SystemSettingsRecord {
    SystemSettingsRecord {
        app_name: app_name.to_string(),
        logo_url: None,
        max_upload_size: 1_048_576,
        allowed_upload_types: vec!["text/plain".to_string()],
        updated_at: TIMESTAMP.to_string(),
        updated_by: Some(OWNER_ID.to_string()),
    }
}

/// Unencrypted manifest text for `data`, tagged with `version`.
pub fn manifest_json(version: &str, data: Value) -> Vec<u8> {
    json!({
        "version": version,
        "encrypted": false,
        "exportedAt": TIMESTAMP,
        "options": { "includeAttachments": false, "includeAvatars": false },
        "data": data
    })
    .to_string()
    .into_bytes()
}
