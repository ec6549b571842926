use crate::Result as DbErrorResult;

use pm_core::{ProjectRecord, parse_millis};

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn insert<'e, E>(executor: E, project: &ProjectRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&project.created_at, "projects.createdAt")?;
        let updated_at = parse_millis(&project.updated_at, "projects.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO projects (id, name, key, description, color, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.id)
        .bind(&project.name)
        .bind(&project.key)
        .bind(project.description.as_deref())
        .bind(&project.color)
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
        let result = sqlx::query("DELETE FROM projects").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
