use crate::{DbError, Result as DbErrorResult};

use pm_core::{RoleRecord, parse_millis};

pub struct RoleRepository;

impl RoleRepository {
    pub async fn insert<'e, E>(executor: E, role: &RoleRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let permissions = DbError::encode_json(&role.permissions, "roles.permissions")?;
        let created_at = parse_millis(&role.created_at, "roles.createdAt")?;
        let updated_at = parse_millis(&role.updated_at, "roles.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO roles (
                    id, project_id, name, color, description, permissions,
                    is_default, position, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&role.id)
        .bind(&role.project_id)
        .bind(&role.name)
        .bind(&role.color)
        .bind(role.description.as_deref())
        .bind(permissions)
        .bind(role.is_default)
        .bind(role.position)
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
        let result = sqlx::query("DELETE FROM roles").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
