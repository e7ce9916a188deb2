use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Row from the `directors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Director {
    pub uid: DbId,
    /// Movie the director is best known for, if recorded.
    pub famous_for: Option<DbId>,
    pub given_name: String,
    pub date_of_birth: EpochSeconds,
}
