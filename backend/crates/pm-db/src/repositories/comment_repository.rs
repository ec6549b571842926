use crate::Result as DbErrorResult;

use pm_core::{CommentRecord, parse_millis};

pub struct CommentRepository;

impl CommentRepository {
    pub async fn insert<'e, E>(executor: E, comment: &CommentRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&comment.created_at, "comments.createdAt")?;
        let updated_at = parse_millis(&comment.updated_at, "comments.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO comments (
                    id, ticket_id, author_id, content, is_system_generated, source,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.ticket_id)
        .bind(&comment.author_id)
        .bind(&comment.content)
        .bind(comment.is_system_generated)
        .bind(comment.source.as_deref())
        .bind(created_at)
        .bind(updated_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM comments").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
