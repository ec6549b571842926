use crate::Result as DbErrorResult;

use pm_core::{TicketActivityRecord, parse_millis};

pub struct TicketActivityRepository;

impl TicketActivityRepository {
    pub async fn insert<'e, E>(executor: E, activity: &TicketActivityRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&activity.created_at, "ticketActivities.createdAt")?;

        sqlx::query(
            r#"
                INSERT INTO ticket_activities (
                    id, ticket_id, user_id, action, field, old_value, new_value,
                    group_id, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.ticket_id)
        .bind(activity.user_id.as_deref())
        .bind(&activity.action)
        .bind(activity.field.as_deref())
        .bind(activity.old_value.as_deref())
        .bind(activity.new_value.as_deref())
        .bind(activity.group_id.as_deref())
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ticket_activities")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
