use crate::{DbError, Result as DbErrorResult};

use pm_core::{SystemSettingsRecord, parse_millis};

/// Primary key of the settings singleton.
pub const SYSTEM_SETTINGS_ID: &str = "system-settings";

pub struct SystemSettingsRepository;

impl SystemSettingsRepository {
    pub async fn upsert<'e, E>(executor: E, settings: &SystemSettingsRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let allowed_upload_types = DbError::encode_json(
            &settings.allowed_upload_types,
            "systemSettings.allowedUploadTypes",
        )?;
        let updated_at = parse_millis(&settings.updated_at, "systemSettings.updatedAt")?;

        sqlx::query(
            r#"
                INSERT INTO system_settings (
                    id, app_name, logo_url, max_upload_size, allowed_upload_types,
                    updated_at, updated_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    app_name = excluded.app_name,
                    logo_url = excluded.logo_url,
                    max_upload_size = excluded.max_upload_size,
                    allowed_upload_types = excluded.allowed_upload_types,
                    updated_at = excluded.updated_at,
                    updated_by = excluded.updated_by
            "#,
        )
        .bind(SYSTEM_SETTINGS_ID)
        .bind(&settings.app_name)
        .bind(settings.logo_url.as_deref())
        .bind(settings.max_upload_size)
        .bind(allowed_upload_types)
        .bind(updated_at)
        .bind(settings.updated_by.as_deref())
        .execute(executor)
        .await?;

        Ok(())
    }
}
