//! Repository for the `actors` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewActor;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::actor::Actor;
use crate::DbPool;

const COLUMNS: &str = "uid, name, date_of_birth";

pub struct ActorRepo;

impl ActorRepo {
    pub async fn insert(conn: &mut SqliteConnection, input: &NewActor) -> Result<DbId, sqlx::Error> {
        sqlx::query("INSERT INTO actors (uid, name, date_of_birth) VALUES (?, ?, ?)")
            .bind(input.uid)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .execute(&mut *conn)
            .await?;
        Ok(input.uid)
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewActor],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(3)) {
            let mut qb =
                QueryBuilder::<Sqlite>::new("INSERT INTO actors (uid, name, date_of_birth) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.uid)
                    .push_bind(row.name.clone())
                    .push_bind(row.date_of_birth);
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_uid(pool: &DbPool, uid: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE uid = ?");
        sqlx::query_as::<_, Actor>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Actor>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM actors")
            .fetch_one(pool)
            .await
    }
}
