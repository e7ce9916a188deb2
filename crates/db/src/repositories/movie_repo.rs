//! Repository for the `movies` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewMovie;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::movie::Movie;
use crate::DbPool;

const COLUMNS: &str = "mid, director_uid, title, release_date, entered_by, created_date";

pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie, returning the new mid. `created_date` is set by storage.
    pub async fn insert(conn: &mut SqliteConnection, input: &NewMovie) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movies (director_uid, title, release_date, entered_by) VALUES (?, ?, ?, ?)",
        )
        .bind(input.director_uid)
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.entered_by)
        .execute(&mut *conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewMovie],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(4)) {
            let mut qb = QueryBuilder::<Sqlite>::new(
                "INSERT INTO movies (director_uid, title, release_date, entered_by) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.director_uid)
                    .push_bind(row.title.clone())
                    .push_bind(row.release_date)
                    .push_bind(row.entered_by);
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &DbPool, mid: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE mid = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(mid)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &DbPool, mid: DbId) -> Result<bool, sqlx::Error> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM movies WHERE mid = ?)")
            .bind(mid)
            .fetch_one(pool)
            .await?;
        Ok(found != 0)
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY mid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }
}
