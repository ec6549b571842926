use crate::Result as DbErrorResult;

use pm_core::{AttachmentRecord, parse_millis};

/// Attachment metadata only; file bytes are restored separately.
pub struct AttachmentRepository;

impl AttachmentRepository {
    pub async fn insert<'e, E>(executor: E, attachment: &AttachmentRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&attachment.created_at, "attachments.createdAt")?;

        sqlx::query(
            r#"
                INSERT INTO attachments (
                    id, ticket_id, filename, original_name, mime_type, size, url,
                    uploader_id, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&attachment.id)
        .bind(&attachment.ticket_id)
        .bind(&attachment.filename)
        .bind(&attachment.original_name)
        .bind(&attachment.mime_type)
        .bind(attachment.size)
        .bind(&attachment.url)
        .bind(&attachment.uploader_id)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM attachments")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
