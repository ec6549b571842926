use crate::Result as DbErrorResult;

use pm_core::LabelRecord;

pub struct LabelRepository;

impl LabelRepository {
    pub async fn insert<'e, E>(executor: E, label: &LabelRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO labels (id, project_id, name, color) VALUES (?, ?, ?, ?)")
            .bind(&label.id)
            .bind(&label.project_id)
            .bind(&label.name)
            .bind(&label.color)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM labels").execute(executor).await?;
        Ok(result.rows_affected())
    }
}
