//! Ticket rows.
//!
//! `parent_id` references another row of the same table, so a restore
//! cannot rely on the order tickets appear in. Rows are inserted with the
//! parent cleared (`insert_detached`) and linked afterwards with
//! `set_parent`, once every ticket exists.

use crate::Result as DbErrorResult;

use pm_core::{TicketRecord, parse_millis, parse_optional_millis};

pub struct TicketRepository;

impl TicketRepository {
    /// Insert a ticket with `parent_id` left NULL.
    pub async fn insert_detached<'e, E>(executor: E, ticket: &TicketRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let start_date = parse_optional_millis(ticket.start_date.as_deref(), "tickets.startDate")?;
        let due_date = parse_optional_millis(ticket.due_date.as_deref(), "tickets.dueDate")?;
        let resolved_at =
            parse_optional_millis(ticket.resolved_at.as_deref(), "tickets.resolvedAt")?;
        let created_at = parse_millis(&ticket.created_at, "tickets.createdAt")?;
        let updated_at = parse_millis(&ticket.updated_at, "tickets.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO tickets (
                    id, number, title, description, ticket_type, priority, position,
                    story_points, estimate, start_date, due_date,
                    environment, affected_version, fix_version, resolution, resolved_at,
                    project_id, column_id, assignee_id, creator_id, sprint_id, parent_id,
                    is_carried_over, carried_from_sprint_id, carryover_count,
                    created_at, updated_at
                ) VALUES (
                    ?, ?, ?, ?, ?, ?, ?,
                    ?, ?, ?, ?,
                    ?, ?, ?, ?, ?,
                    ?, ?, ?, ?, ?, NULL,
                    ?, ?, ?,
                    ?, ?
                )
            "#,
        )
        .bind(&ticket.id)
        .bind(ticket.number)
        .bind(&ticket.title)
        .bind(ticket.description.as_deref())
        .bind(&ticket.ticket_type)
        .bind(&ticket.priority)
        .bind(ticket.order)
        .bind(ticket.story_points)
        .bind(ticket.estimate.as_deref())
        .bind(start_date)
        .bind(due_date)
        .bind(ticket.environment.as_deref())
        .bind(ticket.affected_version.as_deref())
        .bind(ticket.fix_version.as_deref())
        .bind(ticket.resolution.as_deref())
        .bind(resolved_at)
        .bind(&ticket.project_id)
        .bind(&ticket.column_id)
        .bind(ticket.assignee_id.as_deref())
        .bind(&ticket.creator_id)
        .bind(ticket.sprint_id.as_deref())
        .bind(ticket.is_carried_over)
        .bind(ticket.carried_from_sprint_id.as_deref())
        .bind(ticket.carryover_count)
        .bind(created_at)
        .bind(updated_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Link a ticket to its parent. The parent row must already exist.
    pub async fn set_parent<'e, E>(
        executor: E,
        ticket_id: &str,
        parent_id: &str,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE tickets SET parent_id = ? WHERE id = ?")
            .bind(parent_id)
            .bind(ticket_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        // One statement, so the self-reference is only checked once all rows are gone.
        let result = sqlx::query("DELETE FROM tickets").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
