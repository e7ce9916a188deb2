//! Handler for bulk imports (`POST /entry/bulk`).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use ymdb_core::entity::EntityKind;
use ymdb_core::error::CoreError;
use ymdb_db::bulk::BulkImporter;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{BulkImport, Gate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BulkImported {
    pub message: String,
    pub rows_inserted: u64,
}

/// POST /api/v1/entry/bulk
///
/// Multipart form with a text field `relation` and a file field `csv_data`
/// holding tab-delimited rows with a header line. The batch commits
/// all-or-nothing.
pub async fn bulk_import(
    State(state): State<AppState>,
    gate: Gate<BulkImport>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<BulkImported>)> {
    let mut relation: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("relation") => {
                relation = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("csv_data") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                data = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let relation = relation.ok_or_else(|| CoreError::Decode("missing field 'relation'".into()))?;
    let kind = EntityKind::bulk_relation(relation.trim())?;
    let data = data.ok_or_else(|| CoreError::Decode("missing field 'csv_data'".into()))?;

    tracing::debug!(%kind, bytes = data.len(), caller = ?gate.caller.uid, "Bulk import received");
    let outcome = BulkImporter::import_batch(&state.pool, kind, &data).await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkImported {
            message: format!(
                "bulk {} entry success, inserted {} rows",
                kind.relation(),
                outcome.rows_inserted
            ),
            rows_inserted: outcome.rows_inserted,
        }),
    ))
}
