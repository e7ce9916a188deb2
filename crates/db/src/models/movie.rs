use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub mid: DbId,
    pub director_uid: Option<DbId>,
    pub title: String,
    pub release_date: Option<EpochSeconds>,
    /// User who entered the movie.
    pub entered_by: DbId,
    pub created_date: EpochSeconds,
}
