#![allow(dead_code)]

use pm_backup::Importer;
use pm_db::Database;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;

pub async fn create_test_pool() -> SqlitePool {
    Database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn create_importer(pool: &SqlitePool, files_root: &Path) -> Importer {
    Importer::new(pool.clone(), Duration::from_secs(30), files_root)
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

pub async fn ticket_parent(pool: &SqlitePool, ticket_id: &str) -> Option<String> {
    sqlx::query_scalar("SELECT parent_id FROM tickets WHERE id = ?")
        .bind(ticket_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read ticket parent")
}

pub async fn user_avatar(pool: &SqlitePool, user_id: &str) -> Option<String> {
    sqlx::query_scalar("SELECT avatar FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read user avatar")
}
