//! Option lists for the entry forms, each ordered by id.

use crate::models::options::EntryOption;
use crate::DbPool;

pub struct OptionsRepo;

impl OptionsRepo {
    /// Directors as `(uid, u_name)`.
    pub async fn directors(pool: &DbPool) -> Result<Vec<EntryOption>, sqlx::Error> {
        sqlx::query_as::<_, EntryOption>(
            "SELECT d.uid AS id, u.u_name AS label
             FROM directors d JOIN users u ON u.uid = d.uid
             ORDER BY d.uid",
        )
        .fetch_all(pool)
        .await
    }

    /// Actors as `(uid, u_name)`.
    pub async fn actors(pool: &DbPool) -> Result<Vec<EntryOption>, sqlx::Error> {
        sqlx::query_as::<_, EntryOption>(
            "SELECT a.uid AS id, u.u_name AS label
             FROM actors a JOIN users u ON u.uid = a.uid
             ORDER BY a.uid",
        )
        .fetch_all(pool)
        .await
    }

    /// Movies as `(mid, title)`.
    pub async fn movies(pool: &DbPool) -> Result<Vec<EntryOption>, sqlx::Error> {
        sqlx::query_as::<_, EntryOption>("SELECT mid AS id, title AS label FROM movies ORDER BY mid")
            .fetch_all(pool)
            .await
    }

    /// Users as `(uid, u_name)`.
    pub async fn users(pool: &DbPool) -> Result<Vec<EntryOption>, sqlx::Error> {
        sqlx::query_as::<_, EntryOption>("SELECT uid AS id, u_name AS label FROM users ORDER BY uid")
            .fetch_all(pool)
            .await
    }
}
