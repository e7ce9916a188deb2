//! Selection lists offered by the entry forms.

use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::DbId;

/// An `(id, label)` pair, e.g. a director uid and username or a movie mid and title.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EntryOption {
    pub id: DbId,
    pub label: String,
}
