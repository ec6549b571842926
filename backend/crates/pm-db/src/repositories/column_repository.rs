use crate::Result as DbErrorResult;

use pm_core::ColumnRecord;

/// Board columns. Stored in `board_columns`.
pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn insert<'e, E>(executor: E, column: &ColumnRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO board_columns (id, project_id, name, position, icon, color)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&column.id)
        .bind(&column.project_id)
        .bind(&column.name)
        .bind(column.order)
        .bind(column.icon.as_deref())
        .bind(column.color.as_deref())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM board_columns")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
