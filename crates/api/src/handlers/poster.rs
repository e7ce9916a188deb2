//! Handler for poster uploads (`POST /entry/poster`).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use ymdb_core::error::CoreError;
use ymdb_core::naming::validate_poster_upload;
use ymdb_core::validation::parse_identifier;
use ymdb_db::writes::WriteOrchestrator;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{Gate, UploadPoster};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PosterUploaded {
    pub message: String,
    /// Canonical image name the poster is stored under.
    pub image_name: String,
}

/// POST /api/v1/entry/poster
///
/// Multipart form with a text field `mid` and a file field `img`. A second
/// upload for the same movie replaces the first.
pub async fn upload_poster(
    State(state): State<AppState>,
    gate: Gate<UploadPoster>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<PosterUploaded>)> {
    let uploader = gate.caller.require_uid()?;

    let mut mid: Option<String> = None;
    let mut img: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("mid") => {
                mid = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("img") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                img = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    let mid = mid.ok_or_else(|| CoreError::Decode("missing field 'mid'".into()))?;
    let mid = parse_identifier("mid", &mid).map_err(CoreError::from)?;
    let (filename, bytes) = img.ok_or_else(|| CoreError::Decode("missing field 'img'".into()))?;

    let format = validate_poster_upload(&filename, &bytes)?;
    tracing::debug!(mid, ?format, size = bytes.len(), "Poster upload accepted");

    let image_name =
        WriteOrchestrator::replace_poster(&state.pool, &*state.blob_store, mid, uploader, &bytes)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(PosterUploaded {
            message: format!("successfully added poster file for movie id: {mid}"),
            image_name,
        }),
    ))
}
