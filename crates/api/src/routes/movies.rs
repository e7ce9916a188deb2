//! Route definitions for the `/movies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET  /{mid}           -> get_movie
/// POST /{mid}/review    -> submit_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{mid}", get(movies::get_movie))
        .route("/{mid}/review", post(movies::submit_review))
}
