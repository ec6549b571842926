use crate::{DbError, Result as DbErrorResult};

use pm_core::{ProjectSprintSettingsRecord, parse_millis};

pub struct SprintSettingsRepository;

impl SprintSettingsRepository {
    pub async fn insert<'e, E>(
        executor: E,
        settings: &ProjectSprintSettingsRecord,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let done_column_ids = DbError::encode_json(
            &settings.done_column_ids,
            "projectSprintSettings.doneColumnIds",
        )?;
        let created_at = parse_millis(&settings.created_at, "projectSprintSettings.createdAt")?;
        let updated_at = parse_millis(&settings.updated_at, "projectSprintSettings.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO project_sprint_settings (
                    id, project_id, default_sprint_duration, auto_carry_over_incomplete,
                    done_column_ids, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&settings.id)
        .bind(&settings.project_id)
        .bind(settings.default_sprint_duration)
        .bind(settings.auto_carry_over_incomplete)
        .bind(done_column_ids)
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
        let result = sqlx::query("DELETE FROM project_sprint_settings")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
