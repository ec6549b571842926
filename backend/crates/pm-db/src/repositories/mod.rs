pub mod attachment_repository;
pub mod column_repository;
pub mod comment_repository;
pub mod invitation_repository;
pub mod label_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod role_repository;
pub mod sprint_history_repository;
pub mod sprint_repository;
pub mod sprint_settings_repository;
pub mod system_settings_repository;
pub mod ticket_activity_repository;
pub mod ticket_edit_repository;
pub mod ticket_label_repository;
pub mod ticket_link_repository;
pub mod ticket_repository;
pub mod ticket_watcher_repository;
pub mod user_repository;
