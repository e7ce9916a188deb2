//! Repository for the `acted_in` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewActedIn;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::acted_in::ActedIn;
use crate::DbPool;

const COLUMNS: &str = "mid, uid, character_role";

pub struct ActedInRepo;

impl ActedInRepo {
    pub async fn insert(conn: &mut SqliteConnection, input: &NewActedIn) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO acted_in (mid, uid, character_role) VALUES (?, ?, ?)")
            .bind(input.mid)
            .bind(input.uid)
            .bind(&input.character_role)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewActedIn],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(3)) {
            let mut qb =
                QueryBuilder::<Sqlite>::new("INSERT INTO acted_in (mid, uid, character_role) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.mid)
                    .push_bind(row.uid)
                    .push_bind(row.character_role.clone());
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find(pool: &DbPool, mid: DbId, uid: DbId) -> Result<Option<ActedIn>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM acted_in WHERE mid = ? AND uid = ?");
        sqlx::query_as::<_, ActedIn>(&query)
            .bind(mid)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<ActedIn>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM acted_in ORDER BY mid, uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, ActedIn>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM acted_in")
            .fetch_one(pool)
            .await
    }
}
