//! Pool creation and migration smoke tests.

mod common;

use common::test_pool;
use ymdb_db::{health_check, run_migrations};

#[tokio::test]
async fn migrations_are_idempotent() {
    let (_dir, pool) = test_pool().await;
    run_migrations(&pool).await.unwrap();
    health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn foreign_keys_are_enforced() {
    let (_dir, pool) = test_pool().await;
    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1);
}
