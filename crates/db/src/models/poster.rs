use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::DbId;

/// Row from the `posters` table. At most one per movie.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Poster {
    pub mid: DbId,
    /// Blob key of the image, always the canonical name for `mid`.
    pub img: String,
    /// Uploader.
    pub uid: DbId,
}
