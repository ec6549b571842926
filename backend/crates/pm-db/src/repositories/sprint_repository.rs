use crate::Result as DbErrorResult;

use pm_core::{SprintRecord, parse_millis, parse_optional_millis};

pub struct SprintRepository;

impl SprintRepository {
    pub async fn insert<'e, E>(executor: E, sprint: &SprintRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let start_date = parse_optional_millis(sprint.start_date.as_deref(), "sprints.startDate")?;
        let end_date = parse_optional_millis(sprint.end_date.as_deref(), "sprints.endDate")?;
        let completed_at =
            parse_optional_millis(sprint.completed_at.as_deref(), "sprints.completedAt")?;
        let created_at = parse_millis(&sprint.created_at, "sprints.createdAt")?;
        let updated_at = parse_millis(&sprint.updated_at, "sprints.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO sprints (
                    id, project_id, name, goal, start_date, end_date, status,
                    completed_at, completed_by_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&sprint.id)
        .bind(&sprint.project_id)
        .bind(&sprint.name)
        .bind(sprint.goal.as_deref())
        .bind(start_date)
        .bind(end_date)
        .bind(&sprint.status)
        .bind(completed_at)
        .bind(sprint.completed_by_id.as_deref())
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
        let result = sqlx::query("DELETE FROM sprints").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
