//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for reads.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of a successful single-row entry: a message plus the stored row.
#[derive(Debug, Serialize)]
pub struct EntryResponse<T: Serialize> {
    pub message: String,
    pub record: T,
}
