use crate::Result as DbErrorResult;

use pm_core::{InvitationRecord, parse_millis};

pub struct InvitationRepository;

impl InvitationRepository {
    pub async fn insert<'e, E>(executor: E, invitation: &InvitationRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let expires_at = parse_millis(&invitation.expires_at, "invitations.expiresAt")?;
        let created_at = parse_millis(&invitation.created_at, "invitations.createdAt")?;
        let updated_at = parse_millis(&invitation.updated_at, "invitations.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO invitations (
                    id, email, token, role, status, expires_at, invited_by_id,
                    project_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invitation.id)
        .bind(&invitation.email)
        .bind(&invitation.token)
        .bind(&invitation.role)
        .bind(&invitation.status)
        .bind(expires_at)
        .bind(&invitation.invited_by_id)
        .bind(invitation.project_id.as_deref())
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
        let result = sqlx::query("DELETE FROM invitations")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
