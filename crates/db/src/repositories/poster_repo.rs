//! Repository for the `posters` table.

use sqlx::SqliteConnection;
use ymdb_core::types::DbId;

use crate::models::poster::Poster;
use crate::DbPool;

const COLUMNS: &str = "mid, img, uid";

pub struct PosterRepo;

impl PosterRepo {
    /// Insert or replace the single poster row for `mid`.
    pub async fn upsert(
        conn: &mut SqliteConnection,
        mid: DbId,
        img: &str,
        uploader: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR REPLACE INTO posters (mid, img, uid) VALUES (?, ?, ?)")
            .bind(mid)
            .bind(img)
            .bind(uploader)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn find_by_mid(pool: &DbPool, mid: DbId) -> Result<Option<Poster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posters WHERE mid = ?");
        sqlx::query_as::<_, Poster>(&query)
            .bind(mid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<Poster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posters ORDER BY mid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Poster>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posters")
            .fetch_one(pool)
            .await
    }
}
