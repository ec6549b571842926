#![allow(dead_code)]

use pm_core::{
    ColumnRecord, LabelRecord, ProjectRecord, SystemSettingsRecord, TicketRecord, UserRecord,
};

pub const TIMESTAMP: &str = "2024-03-01T09:30:00.000Z";

pub fn create_test_user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        username: format!("user-{}", id),
        email: Some(format!("{}@example.com", id)),
        name: "Test User".to_string(),
        password_hash: None,
        avatar: None,
        avatar_color: Some("#336699".to_string()),
        is_system_admin: false,
        is_active: true,
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
        last_login_at: None,
        password_changed_at: None,
    }
}

pub fn create_test_project(id: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: "Test Project".to_string(),
        key: format!("KEY-{}", id),
        description: None,
        color: "#ff0000".to_string(),
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    }
}

pub fn create_test_column(id: &str, project_id: &str) -> ColumnRecord {
    ColumnRecord {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: "To Do".to_string(),
        order: 0,
        icon: None,
        color: None,
    }
}

pub fn create_test_label(id: &str, project_id: &str) -> LabelRecord {
    LabelRecord {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: format!("label-{}", id),
        color: "#00ff00".to_string(),
    }
}

pub fn create_test_ticket(
    id: &str,
    number: i64,
    project_id: &str,
    column_id: &str,
    creator_id: &str,
) -> TicketRecord {
    TicketRecord {
        id: id.to_string(),
        number,
        title: format!("Ticket {}", number),
        description: None,
        ticket_type: "task".to_string(),
        priority: "medium".to_string(),
        order: number,
        story_points: None,
        estimate: None,
        start_date: None,
        due_date: None,
        environment: None,
        affected_version: None,
        fix_version: None,
        resolution: None,
        resolved_at: None,
        project_id: project_id.to_string(),
        column_id: column_id.to_string(),
        assignee_id: None,
        creator_id: creator_id.to_string(),
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

pub fn create_test_settings(app_name: &str) -> SystemSettingsRecord {
    SystemSettingsRecord {
        app_name: app_name.to_string(),
        logo_url: None,
        max_upload_size: 10_485_760,
        allowed_upload_types: vec!["image/png".to_string(), "application/pdf".to_string()],
        updated_at: TIMESTAMP.to_string(),
        updated_by: None,
    }
}
