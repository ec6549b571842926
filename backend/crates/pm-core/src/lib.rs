pub mod backup;
pub mod error;
pub mod records;


pub use backup::archive_envelope::ArchiveEnvelope;
pub use backup::dataset::Dataset;
pub use backup::encrypted_payload::EncryptedPayload;
pub use backup::entity_counts::EntityCounts;
pub use backup::export_options::ExportOptions;
pub use backup::file_restore_report::FileRestoreReport;
pub use backup::import_result::ImportResult;
pub use backup::timestamps::{
    parse_datetime, parse_millis, parse_optional_datetime, parse_optional_millis,
};
pub use error::{CoreError, Result};
pub use records::attachment_record::AttachmentRecord;
pub use records::column_record::ColumnRecord;
pub use records::comment_record::CommentRecord;
pub use records::invitation_record::InvitationRecord;
pub use records::label_record::LabelRecord;
pub use records::project_member_record::ProjectMemberRecord;
pub use records::project_record::ProjectRecord;
pub use records::project_sprint_settings_record::ProjectSprintSettingsRecord;
pub use records::role_record::RoleRecord;
pub use records::sprint_record::SprintRecord;
pub use records::system_settings_record::SystemSettingsRecord;
pub use records::ticket_activity_record::TicketActivityRecord;
pub use records::ticket_edit_record::TicketEditRecord;
pub use records::ticket_link_record::TicketLinkRecord;
pub use records::ticket_record::TicketRecord;
pub use records::ticket_sprint_history_record::TicketSprintHistoryRecord;
pub use records::ticket_watcher_record::TicketWatcherRecord;
pub use records::user_record::UserRecord;
