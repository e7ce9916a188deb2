//! Write orchestrator.
//!
//! Every single-row write runs in its own transaction: begin, insert, commit,
//! then re-read the committed row so callers echo exactly what storage holds.
//! A failed statement rolls the transaction back and nothing is persisted.

use serde::Serialize;
use sqlx::{Sqlite, SqliteConnection, Transaction};
use ymdb_core::blob::BlobStore;
use ymdb_core::entity::{EntityKind, NewRecord, NewReview};
use ymdb_core::error::CoreError;
use ymdb_core::naming::poster_filename;
use ymdb_core::types::DbId;

use crate::models::acted_in::ActedIn;
use crate::models::actor::Actor;
use crate::models::admin::Admin;
use crate::models::director::Director;
use crate::models::movie::Movie;
use crate::models::review::Review;
use crate::models::user::User;
use crate::repositories::{
    ActedInRepo, ActorRepo, AdminRepo, DirectorRepo, MovieRepo, PosterRepo, ReviewRepo,
    UserRepo,
};
use crate::DbPool;

/// Base result code shared by every SQLite constraint failure.
const SQLITE_CONSTRAINT: i64 = 19;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Domain failure, including classified constraint violations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure that is not a constraint violation.
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for WriteError {
    fn from(err: sqlx::Error) -> Self {
        match constraint_message(&err) {
            Some(message) => WriteError::Core(CoreError::ConstraintViolation(message)),
            None => WriteError::Database(err),
        }
    }
}

/// Extract a message if `err` is a FK, unique, primary-key, not-null or check violation.
pub fn constraint_message(err: &sqlx::Error) -> Option<String> {
    let db_err = err.as_database_error()?;
    let classified = db_err.is_unique_violation()
        || db_err.is_foreign_key_violation()
        || db_err.is_check_violation()
        || matches!(db_err.kind(), sqlx::error::ErrorKind::NotNullViolation);
    let sqlite_constraint = db_err
        .code()
        .and_then(|code| code.parse::<i64>().ok())
        .is_some_and(|code| code & 0xff == SQLITE_CONSTRAINT);

    (classified || sqlite_constraint).then(|| db_err.message().to_string())
}

/// Roll back after a failed statement. A rollback failure is logged, never
/// returned: callers report the statement's own error.
pub(crate) async fn roll_back(tx: Transaction<'_, Sqlite>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "Rollback failed");
    }
}

// ---------------------------------------------------------------------------
// Canonical echo
// ---------------------------------------------------------------------------

/// The committed row, re-read after a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InsertedRecord {
    User(User),
    Admin(Admin),
    Director(Director),
    Actor(Actor),
    Movie(Movie),
    Review(Review),
    ActedIn(ActedIn),
}

impl InsertedRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Admin(_) => EntityKind::Admin,
            Self::Director(_) => EntityKind::Director,
            Self::Actor(_) => EntityKind::Actor,
            Self::Movie(_) => EntityKind::Movie,
            Self::Review(_) => EntityKind::Review,
            Self::ActedIn(_) => EntityKind::ActedIn,
        }
    }
}

/// Key of a freshly inserted row.
#[derive(Debug, Clone, Copy)]
enum RecordKey {
    User(DbId),
    Admin(DbId),
    Director(DbId),
    Actor(DbId),
    Movie(DbId),
    Review { mid: DbId, uid: DbId },
    ActedIn { mid: DbId, uid: DbId },
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

pub struct WriteOrchestrator;

impl WriteOrchestrator {
    /// Insert one validated record in its own transaction and echo the stored row.
    pub async fn insert(pool: &DbPool, record: &NewRecord) -> Result<InsertedRecord, WriteError> {
        let kind = record.kind();
        let mut tx = pool.begin().await?;

        let key = match Self::insert_in(&mut *tx, record).await {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(%kind, error = %e, "Insert failed, rolling back");
                roll_back(tx).await;
                return Err(e.into());
            }
        };
        tx.commit().await?;

        let inserted = Self::echo(pool, key).await?;
        tracing::info!(%kind, ?key, "Record inserted");
        Ok(inserted)
    }

    /// Insert a review for `mid` by the calling user.
    pub async fn insert_review(pool: &DbPool, review: NewReview) -> Result<Review, WriteError> {
        match Self::insert(pool, &NewRecord::Review(review)).await? {
            InsertedRecord::Review(row) => Ok(row),
            other => Err(CoreError::Internal(format!(
                "review insert echoed a {} row",
                other.kind()
            ))
            .into()),
        }
    }

    /// Replace the poster for `mid` and store its image.
    ///
    /// The row is written first inside an open transaction, then the blob,
    /// then the transaction commits. A blob failure rolls the row back and is
    /// reported as a constraint violation. Returns the image name.
    pub async fn replace_poster(
        pool: &DbPool,
        blob_store: &dyn BlobStore,
        mid: DbId,
        uploader: DbId,
        bytes: &[u8],
    ) -> Result<String, WriteError> {
        let img = poster_filename(mid);
        let mut tx = pool.begin().await?;

        if let Err(e) = PosterRepo::upsert(&mut *tx, mid, &img, uploader).await {
            tracing::warn!(mid, error = %e, "Poster row rejected, rolling back");
            roll_back(tx).await;
            return Err(e.into());
        }

        if let Err(e) = blob_store.save(&img, bytes).await {
            tracing::warn!(mid, error = %e, "Poster blob write failed, rolling back");
            roll_back(tx).await;
            return Err(CoreError::ConstraintViolation(format!(
                "failed to store poster image {img}: {e}"
            ))
            .into());
        }

        tx.commit().await?;
        tracing::info!(mid, uploader, img = %img, size = bytes.len(), "Poster replaced");
        Ok(img)
    }

    async fn insert_in(
        conn: &mut SqliteConnection,
        record: &NewRecord,
    ) -> Result<RecordKey, sqlx::Error> {
        let key = match record {
            NewRecord::User(r) => RecordKey::User(UserRepo::insert(conn, r).await?),
            NewRecord::Admin(r) => RecordKey::Admin(AdminRepo::insert(conn, r).await?),
            NewRecord::Director(r) => RecordKey::Director(DirectorRepo::insert(conn, r).await?),
            NewRecord::Actor(r) => RecordKey::Actor(ActorRepo::insert(conn, r).await?),
            NewRecord::Movie(r) => RecordKey::Movie(MovieRepo::insert(conn, r).await?),
            NewRecord::Review(r) => {
                ReviewRepo::insert(conn, r).await?;
                RecordKey::Review { mid: r.mid, uid: r.uid }
            }
            NewRecord::ActedIn(r) => {
                ActedInRepo::insert(conn, r).await?;
                RecordKey::ActedIn { mid: r.mid, uid: r.uid }
            }
        };
        Ok(key)
    }

    async fn echo(pool: &DbPool, key: RecordKey) -> Result<InsertedRecord, WriteError> {
        let found = match key {
            RecordKey::User(uid) => UserRepo::find_by_id(pool, uid)
                .await?
                .map(InsertedRecord::User),
            RecordKey::Admin(uid) => AdminRepo::find_by_uid(pool, uid)
                .await?
                .map(InsertedRecord::Admin),
            RecordKey::Director(uid) => DirectorRepo::find_by_uid(pool, uid)
                .await?
                .map(InsertedRecord::Director),
            RecordKey::Actor(uid) => ActorRepo::find_by_uid(pool, uid)
                .await?
                .map(InsertedRecord::Actor),
            RecordKey::Movie(mid) => MovieRepo::find_by_id(pool, mid)
                .await?
                .map(InsertedRecord::Movie),
            RecordKey::Review { mid, uid } => ReviewRepo::find(pool, mid, uid)
                .await?
                .map(InsertedRecord::Review),
            RecordKey::ActedIn { mid, uid } => ActedInRepo::find(pool, mid, uid)
                .await?
                .map(InsertedRecord::ActedIn),
        };
        found.ok_or_else(|| {
            CoreError::Internal(format!("committed row {key:?} could not be re-read")).into()
        })
    }
}
