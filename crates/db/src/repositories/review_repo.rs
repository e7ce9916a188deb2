//! Repository for the `reviews` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewReview;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::review::Review;
use crate::DbPool;

const COLUMNS: &str = "mid, uid, text, rating, created_date";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review; `created_date` is set by storage.
    pub async fn insert(conn: &mut SqliteConnection, input: &NewReview) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO reviews (mid, uid, text, rating) VALUES (?, ?, ?, ?)")
            .bind(input.mid)
            .bind(input.uid)
            .bind(&input.text)
            .bind(input.rating)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewReview],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(4)) {
            let mut qb =
                QueryBuilder::<Sqlite>::new("INSERT INTO reviews (mid, uid, text, rating) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.mid)
                    .push_bind(row.uid)
                    .push_bind(row.text.clone())
                    .push_bind(row.rating);
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find(pool: &DbPool, mid: DbId, uid: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE mid = ? AND uid = ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(mid)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY mid, uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
    }
}
