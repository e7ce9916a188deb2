//! Shared helpers for storage integration tests.

#![allow(dead_code)]

use tempfile::TempDir;
use ymdb_core::entity::{NewActor, NewDirector, NewMovie, NewRecord, NewUser};
use ymdb_core::types::DbId;
use ymdb_db::writes::{InsertedRecord, WriteOrchestrator};
use ymdb_db::{create_pool, run_migrations, DbPool};

/// A migrated database in a temporary directory. Keep the `TempDir` alive.
pub async fn test_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("ymdb.db").display());
    let pool = create_pool(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    (dir, pool)
}

pub fn new_user(u_name: &str) -> NewUser {
    NewUser {
        u_name: u_name.to_string(),
        email: format!("{u_name}@example.com"),
        password_hash: None,
    }
}

pub async fn seed_user(pool: &DbPool, u_name: &str) -> DbId {
    match WriteOrchestrator::insert(pool, &NewRecord::User(new_user(u_name)))
        .await
        .unwrap()
    {
        InsertedRecord::User(u) => u.uid,
        other => panic!("unexpected echo {other:?}"),
    }
}

pub async fn seed_director(pool: &DbPool, u_name: &str, given_name: &str) -> DbId {
    let uid = seed_user(pool, u_name).await;
    WriteOrchestrator::insert(
        pool,
        &NewRecord::Director(NewDirector {
            uid,
            famous_for: None,
            given_name: given_name.to_string(),
            date_of_birth: 0,
        }),
    )
    .await
    .unwrap();
    uid
}

pub async fn seed_actor(pool: &DbPool, u_name: &str, name: &str) -> DbId {
    let uid = seed_user(pool, u_name).await;
    WriteOrchestrator::insert(
        pool,
        &NewRecord::Actor(NewActor {
            uid,
            name: name.to_string(),
            date_of_birth: 0,
        }),
    )
    .await
    .unwrap();
    uid
}

pub async fn seed_movie(
    pool: &DbPool,
    title: &str,
    director_uid: Option<DbId>,
    release_date: Option<i64>,
    entered_by: DbId,
) -> DbId {
    let movie = NewMovie {
        director_uid,
        title: title.to_string(),
        release_date,
        entered_by,
    };
    match WriteOrchestrator::insert(pool, &NewRecord::Movie(movie))
        .await
        .unwrap()
    {
        InsertedRecord::Movie(m) => m.mid,
        other => panic!("unexpected echo {other:?}"),
    }
}
