mod common;

use common::{
    count_rows, create_test_column, create_test_label, create_test_pool, create_test_project,
    create_test_ticket, create_test_user,
};

use pm_db::{
    ColumnRepository, LabelRepository, ProjectRepository, TicketLabelRepository,
    TicketRepository, UserRepository,
};

use googletest::prelude::*;
use sqlx::SqlitePool;

async fn seed_ticket_and_label(pool: &SqlitePool) {
    UserRepository::insert(pool, &create_test_user("u-1"))
        .await
        .unwrap();
    ProjectRepository::insert(pool, &create_test_project("p-1"))
        .await
        .unwrap();
    ColumnRepository::insert(pool, &create_test_column("c-1", "p-1"))
        .await
        .unwrap();
    LabelRepository::insert(pool, &create_test_label("l-1", "p-1"))
        .await
        .unwrap();
    TicketRepository::insert_detached(pool, &create_test_ticket("t-1", 1, "p-1", "c-1", "u-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_existing_label_when_connected_then_join_row_written() {
    // Given
    let pool = create_test_pool().await;
    seed_ticket_and_label(&pool).await;

    // When
    let connected = TicketLabelRepository::connect(&pool, "t-1", "l-1")
        .await
        .unwrap();

    // Then
    assert_that!(connected, eq(true));
    assert_that!(count_rows(&pool, "ticket_labels").await, eq(1));
}

#[tokio::test]
async fn given_unknown_label_when_connected_then_skipped_without_error() {
    // Given
    let pool = create_test_pool().await;
    seed_ticket_and_label(&pool).await;

    // When
    let connected = TicketLabelRepository::connect(&pool, "t-1", "l-gone")
        .await
        .unwrap();

    // Then
    assert_that!(connected, eq(false));
    assert_that!(count_rows(&pool, "ticket_labels").await, eq(0));
}

#[tokio::test]
async fn given_duplicate_label_id_when_connected_twice_then_single_row() {
    // Given
    let pool = create_test_pool().await;
    seed_ticket_and_label(&pool).await;
    TicketLabelRepository::connect(&pool, "t-1", "l-1")
        .await
        .unwrap();

    // When
    let connected = TicketLabelRepository::connect(&pool, "t-1", "l-1")
        .await
        .unwrap();

    // Then
    assert_that!(connected, eq(false));
    assert_that!(count_rows(&pool, "ticket_labels").await, eq(1));
}
