mod common;

use common::{
    COLUMN_ID, child_ticket, count_rows, create_importer, create_test_pool, example_dataset,
    settings, ticket, ticket_parent, user_avatar,
};

use pm_backup::{BackupError, ImportOptions, Importer};
use pm_core::{ExportOptions, FileRestoreReport};
use pm_db::{Database, SystemSettingsRepository};

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test]
async fn given_example_dataset_when_imported_then_counts_match_and_no_file_report() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());

    // When
    let result = importer
        .import(example_dataset(), ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(result.success, eq(true));
    assert_that!(result.counts.users, eq(2));
    assert_that!(result.counts.projects, eq(1));
    assert_that!(result.counts.columns, eq(4));
    assert_that!(result.counts.labels, eq(1));
    assert_that!(result.counts.tickets, eq(0));
    assert_that!(result.counts.invitations, eq(0));
    assert_that!(result.counts.system_settings, eq(0));
    assert_that!(result.files, eq(&FileRestoreReport::default()));
    assert_that!(count_rows(&pool, "users").await, eq(2));
    assert_that!(count_rows(&pool, "board_columns").await, eq(4));
}

#[tokio::test]
async fn given_existing_data_when_fifth_of_ten_tickets_fails_then_store_unchanged() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut original = example_dataset();
    original.tickets = vec![ticket("t-original", 1)];
    importer
        .import(original, ImportOptions::default())
        .await
        .unwrap();

    let mut replacement = example_dataset();
    replacement.tickets = (1..=10)
        .map(|n| ticket(&format!("t-{}", n), n))
        .collect();
    replacement.tickets[4].column_id = "c-missing".to_string();

    // When
    let result = importer
        .import(replacement, ImportOptions::default())
        .await;

    // Then
    assert!(matches!(result, Err(BackupError::Database { .. })));
    assert_that!(count_rows(&pool, "tickets").await, eq(1));
    assert_that!(count_rows(&pool, "users").await, eq(2));
    let survivor: String = sqlx::query_scalar("SELECT id FROM tickets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_that!(survivor.as_str(), eq("t-original"));
}

#[tokio::test]
async fn given_unparseable_date_when_imported_then_rolled_back() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    dataset.tickets = vec![ticket("t-1", 1)];
    dataset.tickets[0].due_date = Some("next sprint".to_string());

    // When
    let result = importer.import(dataset, ImportOptions::default()).await;

    // Then
    assert!(matches!(result, Err(BackupError::Database { .. })));
    assert_that!(count_rows(&pool, "users").await, eq(0));
}

#[tokio::test]
async fn given_children_listed_before_parents_when_imported_then_parents_linked() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    // t-4 -> t-3 -> t-2 -> t-1, listed leaf first
    dataset.tickets = vec![
        child_ticket("t-4", 4, "t-3"),
        child_ticket("t-3", 3, "t-2"),
        child_ticket("t-2", 2, "t-1"),
        ticket("t-1", 1),
    ];

    // When
    let result = importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(result.counts.tickets, eq(4));
    assert_that!(ticket_parent(&pool, "t-4").await, eq(&Some("t-3".to_string())));
    assert_that!(ticket_parent(&pool, "t-3").await, eq(&Some("t-2".to_string())));
    assert_that!(ticket_parent(&pool, "t-2").await, eq(&Some("t-1".to_string())));
    assert_that!(ticket_parent(&pool, "t-1").await, none());
}

#[tokio::test]
async fn given_empty_parent_id_when_imported_then_no_parent() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    dataset.tickets = vec![child_ticket("t-1", 1, "")];

    // When
    importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(ticket_parent(&pool, "t-1").await, none());
}

#[tokio::test]
async fn given_dangling_parent_when_imported_then_rolled_back() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    dataset.tickets = vec![child_ticket("t-1", 1, "t-nowhere")];

    // When
    let result = importer.import(dataset, ImportOptions::default()).await;

    // Then
    assert!(matches!(result, Err(BackupError::Database { .. })));
    assert_that!(count_rows(&pool, "tickets").await, eq(0));
}

#[tokio::test]
async fn given_unknown_label_reference_when_imported_then_skipped_and_not_counted() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    let mut labelled = ticket("t-1", 1);
    labelled.label_ids = vec!["l-1".to_string(), "l-deleted".to_string()];
    dataset.tickets = vec![labelled];

    // When
    let result = importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(result.counts.ticket_labels, eq(1));
    assert_that!(count_rows(&pool, "ticket_labels").await, eq(1));
}

#[tokio::test]
async fn given_same_dataset_when_imported_twice_then_identical_state() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    dataset.tickets = vec![ticket("t-1", 1), child_ticket("t-2", 2, "t-1")];

    // When
    let first = importer
        .import(dataset.clone(), ImportOptions::default())
        .await
        .unwrap();
    let second = importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(second, eq(&first));
    assert_that!(count_rows(&pool, "tickets").await, eq(2));
    assert_that!(count_rows(&pool, "users").await, eq(2));
}

#[tokio::test]
async fn given_dataset_without_settings_when_imported_then_existing_settings_kept() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    SystemSettingsRepository::upsert(&pool, &settings("Existing"))
        .await
        .unwrap();

    // When
    importer
        .import(example_dataset(), ImportOptions::default())
        .await
        .unwrap();

    // Then
    let app_name: String = sqlx::query_scalar("SELECT app_name FROM system_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_that!(app_name.as_str(), eq("Existing"));
}

#[tokio::test]
async fn given_dataset_with_settings_when_imported_then_singleton_replaced() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    SystemSettingsRepository::upsert(&pool, &settings("Existing"))
        .await
        .unwrap();
    let mut dataset = example_dataset();
    dataset.system_settings = Some(settings("Restored"));

    // When
    let result = importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap();

    // Then
    let app_name: String = sqlx::query_scalar("SELECT app_name FROM system_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_that!(app_name.as_str(), eq("Restored"));
    assert_that!(result.counts.system_settings, eq(1));
    assert_that!(count_rows(&pool, "system_settings").await, eq(1));
}

#[tokio::test]
async fn given_avatars_included_without_archive_when_imported_then_avatars_cleared() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let options = ImportOptions {
        archive_bytes: None,
        export_options: ExportOptions {
            include_attachments: false,
            include_avatars: true,
        },
    };

    // When
    importer.import(example_dataset(), options).await.unwrap();

    // Then
    assert_that!(user_avatar(&pool, "u-1").await, none());
    assert_that!(user_avatar(&pool, "u-2").await, none());
}

#[tokio::test]
async fn given_avatars_not_included_when_imported_then_avatar_urls_kept() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());

    // When
    importer
        .import(example_dataset(), ImportOptions::default())
        .await
        .unwrap();

    // Then
    assert_that!(
        user_avatar(&pool, "u-1").await,
        eq(&Some("/uploads/avatars/u-1.png".to_string()))
    );
}

#[tokio::test]
async fn given_import_running_when_second_import_starts_then_import_in_progress() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());

    // When
    let (first, second) = tokio::join!(
        importer.import(example_dataset(), ImportOptions::default()),
        importer.import(example_dataset(), ImportOptions::default()),
    );

    // Then
    assert_that!(first.is_ok(), eq(true));
    assert!(matches!(second, Err(BackupError::ImportInProgress { .. })));
}

#[tokio::test]
async fn given_zero_timeout_when_imported_then_import_timeout_and_store_unchanged() {
    // Given
    let root = tempfile::tempdir().unwrap();
    let pool = Database::open(&root.path().join("store.db")).await.unwrap();
    create_importer(&pool, root.path())
        .import(example_dataset(), ImportOptions::default())
        .await
        .unwrap();
    let mut dataset = example_dataset();
    dataset.tickets = vec![ticket("t-1", 1)];
    let impatient = Importer::new(pool.clone(), Duration::ZERO, root.path());

    // When
    let result = impatient.import(dataset, ImportOptions::default()).await;

    // Then
    assert!(matches!(result, Err(BackupError::ImportTimeout { .. })));
    assert_that!(count_rows(&pool, "tickets").await, eq(0));
    assert_that!(count_rows(&pool, "users").await, eq(2));
}

#[tokio::test]
async fn given_deadline_during_inserts_when_imported_then_existing_rows_survive() {
    // Given
    let root = tempfile::tempdir().unwrap();
    let pool = Database::open(&root.path().join("store.db")).await.unwrap();
    let mut existing = example_dataset();
    existing.tickets = vec![ticket("t-original", 1)];
    create_importer(&pool, root.path())
        .import(existing, ImportOptions::default())
        .await
        .unwrap();

    let mut large = example_dataset();
    large.tickets = (1..=20_000)
        .map(|n| ticket(&format!("t-{}", n), n))
        .collect();
    let impatient = Importer::new(pool.clone(), Duration::from_millis(5), root.path());

    // When
    let result = impatient.import(large, ImportOptions::default()).await;

    // Then
    assert!(matches!(result, Err(BackupError::ImportTimeout { .. })));
    assert_that!(count_rows(&pool, "tickets").await, eq(1));
    assert_that!(count_rows(&pool, "users").await, eq(2));

    // The rolled back attempt leaves nothing locked behind.
    let mut retry = example_dataset();
    retry.tickets = vec![ticket("t-1", 1)];
    let outcome = create_importer(&pool, root.path())
        .import(retry, ImportOptions::default())
        .await
        .unwrap();
    assert_that!(outcome.counts.tickets, eq(1));
}

#[tokio::test]
async fn given_bad_column_reference_when_imported_then_error_names_database() {
    // Given
    let pool = create_test_pool().await;
    let root = tempfile::tempdir().unwrap();
    let importer = create_importer(&pool, root.path());
    let mut dataset = example_dataset();
    let mut orphan = ticket("t-1", 1);
    orphan.column_id = format!("{}-gone", COLUMN_ID);
    dataset.tickets = vec![orphan];

    // When
    let error = importer
        .import(dataset, ImportOptions::default())
        .await
        .unwrap_err();

    // Then
    assert_that!(error.to_string(), contains_substring("rolled back"));
}
