use crate::Result as DbErrorResult;

use pm_core::{TicketLinkRecord, parse_millis};

pub struct TicketLinkRepository;

impl TicketLinkRepository {
    pub async fn insert<'e, E>(executor: E, link: &TicketLinkRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&link.created_at, "ticketLinks.createdAt")?;

        sqlx::query(
            r#"
                INSERT INTO ticket_links (id, from_ticket_id, to_ticket_id, link_type, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&link.id)
        .bind(&link.from_ticket_id)
        .bind(&link.to_ticket_id)
        .bind(&link.link_type)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_links")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
