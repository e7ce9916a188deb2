//! Repository for the `admins` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewAdmin;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::admin::Admin;
use crate::DbPool;

const COLUMNS: &str = "uid, position";

pub struct AdminRepo;

impl AdminRepo {
    pub async fn insert(conn: &mut SqliteConnection, input: &NewAdmin) -> Result<DbId, sqlx::Error> {
        sqlx::query("INSERT INTO admins (uid, position) VALUES (?, ?)")
            .bind(input.uid)
            .bind(&input.position)
            .execute(&mut *conn)
            .await?;
        Ok(input.uid)
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewAdmin],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(2)) {
            let mut qb = QueryBuilder::<Sqlite>::new("INSERT INTO admins (uid, position) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.uid).push_bind(row.position.clone());
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_uid(pool: &DbPool, uid: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE uid = ?");
        sqlx::query_as::<_, Admin>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Admin>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(pool)
            .await
    }
}
