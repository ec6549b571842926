pub mod attachment_record;
pub mod column_record;
pub mod comment_record;
pub mod invitation_record;
pub mod label_record;
pub mod project_member_record;
pub mod project_record;
pub mod project_sprint_settings_record;
pub mod role_record;
pub mod sprint_record;
pub mod system_settings_record;
pub mod ticket_activity_record;
pub mod ticket_edit_record;
pub mod ticket_link_record;
pub mod ticket_record;
pub mod ticket_sprint_history_record;
pub mod ticket_watcher_record;
pub mod user_record;
