use crate::Result as DbErrorResult;

use pm_core::{TicketWatcherRecord, parse_millis};

pub struct TicketWatcherRepository;

impl TicketWatcherRepository {
    pub async fn insert<'e, E>(executor: E, watcher: &TicketWatcherRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&watcher.created_at, "ticketWatchers.createdAt")?;

        sqlx::query(
            "INSERT INTO ticket_watchers (id, ticket_id, user_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&watcher.id)
        .bind(&watcher.ticket_id)
        .bind(&watcher.user_id)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_watchers")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
