//! Repository for the `users` and `passwords` tables.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use ymdb_core::entity::NewUser;
use ymdb_core::types::DbId;

use super::rows_per_chunk;
use crate::models::user::{User, UserCredentials};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "uid, u_name, email, created_date";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user (and its password row, if any). Returns the new uid.
    pub async fn insert(conn: &mut SqliteConnection, input: &NewUser) -> Result<DbId, sqlx::Error> {
        let uid = sqlx::query("INSERT INTO users (u_name, email) VALUES (?, ?)")
            .bind(&input.u_name)
            .bind(&input.email)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        if let Some(hash) = &input.password_hash {
            sqlx::query("INSERT INTO passwords (uid, password_hash) VALUES (?, ?)")
                .bind(uid)
                .bind(hash)
                .execute(&mut *conn)
                .await?;
        }
        Ok(uid)
    }

    /// Multi-row insert of users without credentials. Returns rows inserted.
    pub async fn insert_many(
        conn: &mut SqliteConnection,
        rows: &[NewUser],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_chunk(2)) {
            let mut qb = QueryBuilder::<Sqlite>::new("INSERT INTO users (u_name, email) ");
            qb.push_values(chunk, |mut b, row| {
                b.push_bind(row.u_name.clone()).push_bind(row.email.clone());
            });
            inserted += qb.build().execute(&mut *conn).await?.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn find_by_id(pool: &DbPool, uid: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE uid = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Username, credential and admin position for login (case-sensitive).
    pub async fn find_credentials(
        pool: &DbPool,
        u_name: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT u.uid, u.u_name, u.email, p.password_hash, a.position
             FROM users u
             LEFT JOIN passwords p ON p.uid = u.uid
             LEFT JOIN admins a ON a.uid = u.uid
             WHERE u.u_name = ?",
        )
        .bind(u_name)
        .fetch_optional(pool)
        .await
    }

    pub async fn list(pool: &DbPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY uid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
