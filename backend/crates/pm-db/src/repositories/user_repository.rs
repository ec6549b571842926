use crate::Result as DbErrorResult;

use pm_core::{UserRecord, parse_millis, parse_optional_millis};

pub struct UserRepository;

impl UserRepository {
    pub async fn insert<'e, E>(executor: E, user: &UserRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = parse_millis(&user.created_at, "users.createdAt")?;
        let updated_at = parse_millis(&user.updated_at, "users.updatedAt")?;
        let last_login_at =
            parse_optional_millis(user.last_login_at.as_deref(), "users.lastLoginAt")?;
        let password_changed_at = parse_optional_millis(
            user.password_changed_at.as_deref(),
            "users.passwordChangedAt",
        )?;

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, email, name, password_hash,
                    avatar, avatar_color, is_system_admin, is_active,
                    created_at, updated_at, last_login_at, password_changed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(user.email.as_deref())
        .bind(&user.name)
        .bind(user.password_hash.as_deref())
        .bind(user.avatar.as_deref())
        .bind(user.avatar_color.as_deref())
        .bind(user.is_system_admin)
        .bind(user.is_active)
        .bind(created_at)
        .bind(updated_at)
        .bind(last_login_at)
        .bind(password_changed_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM users").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
