use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Row from the `reviews` table. Keyed by `(mid, uid)`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Review {
    pub mid: DbId,
    pub uid: DbId,
    pub text: String,
    pub rating: i64,
    pub created_date: EpochSeconds,
}
