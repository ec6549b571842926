use crate::{DbError, Result as DbErrorResult};

use pm_core::{ProjectMemberRecord, parse_millis};

pub struct ProjectMemberRepository;

impl ProjectMemberRepository {
    pub async fn insert<'e, E>(executor: E, member: &ProjectMemberRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let override_permissions = member
            .override_permissions
            .as_ref()
            .map(|perms| DbError::encode_json(perms, "projectMembers.overridePermissions"))
            .transpose()?;
        let created_at = parse_millis(&member.created_at, "projectMembers.createdAt")?;
        let updated_at = parse_millis(&member.updated_at, "projectMembers.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO project_members (
                    id, project_id, user_id, role_id, override_permissions,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&member.id)
        .bind(&member.project_id)
        .bind(&member.user_id)
        .bind(&member.role_id)
        .bind(override_permissions)
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
        let result = sqlx::query("DELETE FROM project_members")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
