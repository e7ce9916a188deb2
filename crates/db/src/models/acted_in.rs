use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::DbId;

/// Row from the `acted_in` table. Keyed by `(mid, uid)`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActedIn {
    pub mid: DbId,
    pub uid: DbId,
    pub character_role: String,
}
