//! Transactional bulk import.
//!
//! A batch is parsed and validated in full before the transaction opens. All
//! rows are then written inside one transaction: any storage failure rolls
//! back the entire batch.

use serde::Serialize;
use sqlx::SqliteConnection;
use ymdb_core::bulk::parse_batch;
use ymdb_core::entity::{EntityKind, NewBatch};

use crate::repositories::{
    ActedInRepo, ActorRepo, AdminRepo, DirectorRepo, MovieRepo, ReviewRepo, UserRepo,
};
use crate::writes::{roll_back, WriteError};
use crate::DbPool;

/// Result of a committed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub kind: EntityKind,
    /// Rows physically inserted.
    pub rows_inserted: u64,
}

pub struct BulkImporter;

impl BulkImporter {
    /// Parse, validate and insert a tab-delimited payload for `kind`.
    pub async fn import_batch(
        pool: &DbPool,
        kind: EntityKind,
        bytes: &[u8],
    ) -> Result<BatchOutcome, WriteError> {
        let batch = parse_batch(kind, bytes)?;
        Self::insert_batch(pool, &batch).await
    }

    /// Insert an already validated batch in a single transaction.
    pub async fn insert_batch(pool: &DbPool, batch: &NewBatch) -> Result<BatchOutcome, WriteError> {
        let kind = batch.kind();
        let mut tx = pool.begin().await?;

        let rows_inserted = match Self::insert_rows(&mut *tx, batch).await {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(%kind, rows = batch.len(), error = %e, "Bulk insert failed, rolling back");
                roll_back(tx).await;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        tracing::info!(%kind, rows_inserted, "Bulk import committed");
        Ok(BatchOutcome {
            kind,
            rows_inserted,
        })
    }

    async fn insert_rows(conn: &mut SqliteConnection, batch: &NewBatch) -> Result<u64, sqlx::Error> {
        if batch.is_empty() {
            return Ok(0);
        }
        match batch {
            NewBatch::Users(rows) => UserRepo::insert_many(conn, rows).await,
            NewBatch::Admins(rows) => AdminRepo::insert_many(conn, rows).await,
            NewBatch::Directors(rows) => DirectorRepo::insert_many(conn, rows).await,
            NewBatch::Actors(rows) => ActorRepo::insert_many(conn, rows).await,
            NewBatch::Movies(rows) => MovieRepo::insert_many(conn, rows).await,
            NewBatch::Reviews(rows) => ReviewRepo::insert_many(conn, rows).await,
            NewBatch::ActedIn(rows) => ActedInRepo::insert_many(conn, rows).await,
        }
    }
}
