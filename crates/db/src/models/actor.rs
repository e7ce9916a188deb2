use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub uid: DbId,
    pub name: String,
    pub date_of_birth: EpochSeconds,
}
