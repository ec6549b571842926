pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::attachment_repository::AttachmentRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::invitation_repository::InvitationRepository;
pub use repositories::label_repository::LabelRepository;
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::sprint_history_repository::SprintHistoryRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::sprint_settings_repository::SprintSettingsRepository;
pub use repositories::system_settings_repository::{SYSTEM_SETTINGS_ID, SystemSettingsRepository};
pub use repositories::ticket_activity_repository::TicketActivityRepository;
pub use repositories::ticket_edit_repository::TicketEditRepository;
pub use repositories::ticket_label_repository::TicketLabelRepository;
pub use repositories::ticket_link_repository::TicketLinkRepository;
pub use repositories::ticket_repository::TicketRepository;
pub use repositories::ticket_watcher_repository::TicketWatcherRepository;
pub use repositories::user_repository::UserRepository;
