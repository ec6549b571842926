use crate::Result as DbErrorResult;

use pm_core::{TicketSprintHistoryRecord, parse_millis, parse_optional_millis};

pub struct SprintHistoryRepository;

impl SprintHistoryRepository {
    pub async fn insert<'e, E>(executor: E, entry: &TicketSprintHistoryRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let added_at = parse_millis(&entry.added_at, "ticketSprintHistory.addedAt")?;
        let removed_at =
            parse_optional_millis(entry.removed_at.as_deref(), "ticketSprintHistory.removedAt")?;

        sqlx::query(
            r#"
                INSERT INTO ticket_sprint_history (
                    id, ticket_id, sprint_id, added_at, removed_at, entry_type, exit_status
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.ticket_id)
        .bind(&entry.sprint_id)
        .bind(added_at)
        .bind(removed_at)
        .bind(&entry.entry_type)
        .bind(entry.exit_status.as_deref())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_sprint_history")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
