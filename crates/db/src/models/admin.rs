use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::DbId;

/// Row from the `admins` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Admin {
    pub uid: DbId,
    pub position: String,
}
