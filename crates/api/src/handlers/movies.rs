//! Handlers for the `/movies` resource: detail page and per-movie reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use ymdb_core::codec::{decode_movie_review, RawRecord};
use ymdb_core::error::CoreError;
use ymdb_core::types::DbId;
use ymdb_core::validation::parse_identifier;
use ymdb_db::models::movie_detail::MovieDetail;
use ymdb_db::models::review::Review;
use ymdb_db::repositories::{MovieDetailRepo, MovieRepo};
use ymdb_db::writes::WriteOrchestrator;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{Gate, SubmitMovieReview};
use crate::response::{DataResponse, EntryResponse};
use crate::state::AppState;

fn parse_mid(raw: &str) -> Result<DbId, AppError> {
    Ok(parse_identifier("mid", raw).map_err(CoreError::from)?)
}

fn movie_not_found(mid: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "movie",
        id: mid,
    })
}

/// GET /api/v1/movies/{mid}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(mid): Path<String>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let mid = parse_mid(&mid)?;
    let detail = MovieDetailRepo::assemble(&state.pool, mid)
        .await?
        .ok_or_else(|| movie_not_found(mid))?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/movies/{mid}/review
///
/// Form fields `text` and `rating`; the reviewer is the caller.
pub async fn submit_review(
    State(state): State<AppState>,
    gate: Gate<SubmitMovieReview>,
    Path(mid): Path<String>,
    Form(raw): Form<RawRecord>,
) -> AppResult<(StatusCode, Json<EntryResponse<Review>>)> {
    let uid = gate.caller.require_uid()?;
    let mid = parse_mid(&mid)?;

    if !MovieRepo::exists(&state.pool, mid).await? {
        return Err(movie_not_found(mid));
    }

    let review = decode_movie_review(mid, uid, &raw)?;
    let row = WriteOrchestrator::insert_review(&state.pool, review).await?;

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "inserted new review successfully".to_string(),
            record: row,
        }),
    ))
}
