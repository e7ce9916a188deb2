//! Repository for the `directors` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewDirector;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::director::Director;
use crate::DbPool;

const COLUMNS: &str = "uid, famous_for, given_name, date_of_birth";

pub struct DirectorRepo;

impl DirectorRepo {
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &NewDirector,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query(
            "INSERT INTO directors (uid, famous_for, given_name, date_of_birth) VALUES (?, ?, ?, ?)",
        )
        .bind(input.uid)
        .bind(input.famous_for)
        .bind(&input.given_name)
        .bind(input.date_of_birth)
        .execute(&mut *conn)
        .await?;
        Ok(input.uid)
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewDirector],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(4)) {
            let mut qb = QueryBuilder::<Sqlite>::new(
                "INSERT INTO directors (uid, famous_for, given_name, date_of_birth) ",
            );
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.uid)
                    .push_bind(row.famous_for)
                    .push_bind(row.given_name.clone())
                    .push_bind(row.date_of_birth);
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_uid(pool: &DbPool, uid: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE uid = ?");
        sqlx::query_as::<_, Director>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &DbPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Director>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM directors")
            .fetch_one(pool)
            .await
    }
}
