use pm_db::Database;

use sqlx::SqlitePool;

/// Creates an in-memory store with migrations run and foreign keys on.
pub async fn create_test_pool() -> SqlitePool {
    Database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Counts rows in a table.
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
