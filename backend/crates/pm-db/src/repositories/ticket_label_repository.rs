use crate::Result as DbErrorResult;

/// Many-to-many join between tickets and labels.
pub struct TicketLabelRepository;

impl TicketLabelRepository {
    /// Connect a ticket to a label. A label id with no matching row is
    /// skipped rather than failing the import; returns whether a row was
    /// written.
    pub async fn connect<'e, E>(executor: E, ticket_id: &str, label_id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO ticket_labels (ticket_id, label_id)
                SELECT ?, id FROM labels WHERE id = ?
            "#,
        )
        .bind(ticket_id)
        .bind(label_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_labels")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
