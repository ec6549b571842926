use crate::Result as DbErrorResult;

use pm_core::{TicketEditRecord, parse_millis};

pub struct TicketEditRepository;

impl TicketEditRepository {
    pub async fn insert<'e, E>(executor: E, edit: &TicketEditRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&edit.created_at, "ticketEdits.createdAt")?;

        sqlx::query(
            r#"
                INSERT INTO ticket_edits (
                    id, ticket_id, user_id, field, old_value, new_value, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&edit.id)
        .bind(&edit.ticket_id)
        .bind(&edit.user_id)
        .bind(&edit.field)
        .bind(edit.old_value.as_deref())
        .bind(edit.new_value.as_deref())
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_edits")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
